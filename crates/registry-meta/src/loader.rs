//! Loading registry source documents
//!
//! A registry source is either a top-level array of entries
//! (`registry.json`, `registry.yaml`) or a table holding an `items` array,
//! which is the only shape TOML can express:
//!
//! ```toml
//! [[items]]
//! name = "alert"
//! type = "registry:ui"
//! files = ["ui/alert.tsx"]
//! ```

use registry_fs::{ConfigStore, NormalizedPath};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::schema::Registry;
use crate::validation::validate_list;

/// Key holding the entry list in table-shaped registry sources.
const ITEMS_KEY: &str = "items";

/// Load and validate the registry source at `path`.
pub fn load_registry(path: &NormalizedPath) -> Result<Registry> {
    if !path.is_file() {
        return Err(Error::RegistryNotFound {
            path: path.to_native(),
        });
    }

    let document: Value = ConfigStore::new().load(path)?;
    let items = match document {
        Value::Object(mut table) => table.remove(ITEMS_KEY).ok_or_else(|| Error::InvalidRegistry {
            message: format!("{path} is a table without an `{ITEMS_KEY}` array"),
        })?,
        other => other,
    };

    let registry = validate_list(items)?;
    tracing::info!(path = %path, entries = registry.len(), "loaded registry");
    Ok(registry)
}
