//! Source module parsing and editing for the UI registry builder
//!
//! Parses component sources with the tree-sitter TypeScript or TSX grammar
//! and removes top-level declarations that only mean something to the
//! documentation site (`iframeHeight`, `containerClassName`, `description`).

pub mod dialect;
pub mod edit;
pub mod error;
pub mod module;
pub mod strip;

pub use dialect::Dialect;
pub use edit::{Edit, EditKind};
pub use error::{Error, Result};
pub use module::SourceModule;
pub use strip::{PREVIEW_DIRECTIVES, Stripped, strip_declarations, strip_preview_directives};
