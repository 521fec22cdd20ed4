//! Error types for registry-core

/// Result type for registry-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a build
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A registry source file could not be parsed
    #[error("Failed to parse registry source {path}: {source}")]
    Content {
        path: String,
        #[source]
        source: registry_content::Error,
    },

    /// Strict mode found entries sharing a name
    #[error("Duplicate entry names: {}", .names.join(", "))]
    DuplicateName { names: Vec<String> },

    /// An artifact could not be serialized
    #[error("Failed to serialize {artifact}: {source}")]
    Serialize {
        artifact: String,
        #[source]
        source: serde_json::Error,
    },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from registry-fs
    #[error(transparent)]
    Fs(#[from] registry_fs::Error),

    /// Schema or configuration error from registry-meta
    #[error(transparent)]
    Meta(#[from] registry_meta::Error),
}
