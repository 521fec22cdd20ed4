//! Typed registry entry schema
//!
//! Registry sources are JSON-shaped documents:
//!
//! ```json
//! [
//!   {
//!     "name": "alert",
//!     "type": "registry:ui",
//!     "registryDependencies": ["button"],
//!     "files": ["ui/alert.tsx", { "path": "lib/utils.ts", "type": "registry:lib" }]
//!   }
//! ]
//! ```

pub mod chunk;
pub mod entry;
pub mod file;
pub mod item_type;
pub mod style;

pub use chunk::{BlockChunk, ChunkContainer};
pub use entry::{Registry, RegistryEntry};
pub use file::{FileObject, FileRef};
pub use item_type::ItemType;
pub use style::{CssVars, TailwindConfig, TailwindSettings};
