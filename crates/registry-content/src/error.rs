//! Error types for registry-content

/// Result type for registry-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in registry-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse source at line {line}, column {column}: {message}")]
    ParseError {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Failed to load grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
}

impl Error {
    pub fn parse(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            column,
            message: message.into(),
        }
    }
}
