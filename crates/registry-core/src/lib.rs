//! Artifact generation pipeline for the UI registry builder
//!
//! Turns a validated [`Registry`](registry_meta::Registry) into the static
//! artifacts a component installer consumes:
//!
//! - **Manifest** (`index.json`): every entry of the included kinds, file
//!   references normalized, no contents
//! - **Detail files** (`<name>.json`): one per entry, file contents resolved
//!   and stripped of preview directives, install targets computed
//! - **Lookup index** (`index.tsx`): name to metadata and lazy import, for
//!   the documentation site's module loader
//!
//! # Architecture
//!
//! ```text
//!                 registry-cli
//!                      |
//!                registry-core
//!                      |
//!     +----------------+-----------------+
//!     |                |                 |
//! registry-fs   registry-meta   registry-content
//! ```
//!
//! The three builders are independent passes over the read-only registry;
//! [`RegistryBuilder`] runs them in sequence and collects a [`BuildReport`].

pub mod build;
pub mod detail;
pub mod error;
pub mod lookup;
pub mod manifest;
pub mod report;
pub mod resolve;

pub use build::{BuildOptions, RegistryBuilder};
pub use detail::{detail_document, write_details};
pub use error::{Error, Result};
pub use lookup::{LOOKUP_FILE, render_lookup_index, write_lookup_index};
pub use manifest::{MANIFEST_FILE, build_manifest, write_manifest};
pub use report::{Artifact, BuildReport, Diagnostic};
pub use resolve::{FsSourceReader, Resolution, SourceReader, V0_PREFIX, install_target, resolve_file};
