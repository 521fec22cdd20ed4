//! Registry entry schema, validation and configuration.
//!
//! This crate defines the typed shape of a registry entry, the validation
//! rules applied at ingestion and before a detail artifact is written, and
//! the `registry.toml` build configuration.

pub mod config;
pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use config::{BuildConfig, CONFIG_FILE, RegistryConfig, load_config, load_config_file};
pub use error::{Error, Result};
pub use loader::load_registry;
pub use schema::{
    BlockChunk, ChunkContainer, CssVars, FileObject, FileRef, ItemType, Registry, RegistryEntry,
    TailwindConfig, TailwindSettings,
};
pub use validation::{DETAIL_OMITTED_FIELDS, EntryField, validate_and_trim, validate_list};
