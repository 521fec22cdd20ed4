//! Error types for registry-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] registry_fs::Error),

    #[error("Registry source not found at {path}")]
    RegistryNotFound { path: PathBuf },

    #[error("Invalid registry: {message}")]
    InvalidRegistry { message: String },

    #[error("Invalid registry entry {entry}: {message}")]
    InvalidEntry { entry: String, message: String },

    #[error("Unknown registry item kind: {kind}")]
    InvalidKind { kind: String },

    #[error("Invalid configuration at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },
}

impl Error {
    pub(crate) fn invalid_entry(entry: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidEntry {
            entry: entry.into(),
            message: message.into(),
        }
    }
}
