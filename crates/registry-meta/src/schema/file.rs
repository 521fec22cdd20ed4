//! File references inside a registry entry

use serde::{Deserialize, Serialize};

use super::ItemType;

/// A file reference as authored in the registry.
///
/// Either the legacy bare path string or the structured object form. Bare
/// strings inherit the owning entry's kind when normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileRef {
    Path(String),
    Object(FileObject),
}

/// Structured file reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileObject {
    /// Path relative to the registry source root (e.g. `ui/alert.tsx`)
    pub path: String,
    /// Kind of the file, drives the install location
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Resolved source text; only set in detail artifacts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Install path inside a consumer project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl FileRef {
    /// Path of the referenced file, whichever form it was written in.
    pub fn path(&self) -> &str {
        match self {
            FileRef::Path(path) => path,
            FileRef::Object(file) => &file.path,
        }
    }

    /// Convert to the structured form, defaulting the kind to `owner`.
    pub fn normalize(&self, owner: ItemType) -> FileObject {
        match self {
            FileRef::Path(path) => FileObject::new(path.clone(), owner),
            FileRef::Object(file) => file.clone(),
        }
    }
}

impl FileObject {
    pub fn new(path: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            path: path.into(),
            item_type,
            content: None,
            target: None,
        }
    }

    /// The explicit install target, ignoring empty strings.
    pub fn explicit_target(&self) -> Option<&str> {
        self.target.as_deref().filter(|t| !t.is_empty())
    }
}

impl From<FileObject> for FileRef {
    fn from(file: FileObject) -> Self {
        FileRef::Object(file)
    }
}

impl From<&str> for FileRef {
    fn from(path: &str) -> Self {
        FileRef::Path(path.to_string())
    }
}
