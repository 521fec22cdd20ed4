//! Filesystem primitives for the UI registry builder
//!
//! Provides forward-slash path handling, atomic artifact writes and
//! format-agnostic document loading.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use checksum::{compute_content_checksum, compute_file_checksum};
pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::{NormalizedPath, validate_path_identifier};
