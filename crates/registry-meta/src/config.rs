//! Build configuration loaded from `registry.toml`
//!
//! ```toml
//! [build]
//! registry = "registry.json"
//! registry_dir = "registry"
//! output_dir = "public/r"
//! index_dir = "__registry__"
//! include = ["ui", "hook", "lib"]
//! strict = false
//! ```
//!
//! Every key is optional.

use registry_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::ItemType;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "registry.toml";

/// Top-level configuration document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub build: BuildConfig,
}

/// Settings for one build invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Registry source document
    pub registry: String,
    /// Root directory file references are resolved against
    pub registry_dir: String,
    /// Directory receiving `index.json` and the `<name>.json` artifacts
    pub output_dir: String,
    /// Directory receiving the generated `index.tsx`
    pub index_dir: String,
    /// Kinds listed in `index.json`, bare or prefixed
    pub include: Vec<String>,
    /// Abort on duplicate entry names instead of letting the last one win
    pub strict: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            registry: "registry.json".to_string(),
            registry_dir: "registry".to_string(),
            output_dir: "public/r".to_string(),
            index_dir: "__registry__".to_string(),
            include: vec!["ui".to_string(), "hook".to_string(), "lib".to_string()],
            strict: false,
        }
    }
}

impl BuildConfig {
    /// The manifest include-set as typed kinds.
    pub fn include_kinds(&self) -> Result<Vec<ItemType>> {
        ItemType::parse_list(self.include.as_slice())
    }
}

/// Load `registry.toml` from `root`, falling back to defaults when absent.
pub fn load_config(root: &NormalizedPath) -> Result<RegistryConfig> {
    let path = root.join(CONFIG_FILE);
    if !path.is_file() {
        tracing::debug!(path = %path, "no configuration file, using defaults");
        return Ok(RegistryConfig::default());
    }
    load_config_file(&path)
}

/// Load a configuration document at an explicit path, which must exist.
pub fn load_config_file(path: &NormalizedPath) -> Result<RegistryConfig> {
    let config: RegistryConfig = ConfigStore::new().load(path)?;
    config
        .build
        .include_kinds()
        .map_err(|e| Error::InvalidConfig {
            path: path.to_native(),
            message: e.to_string(),
        })?;
    Ok(config)
}
