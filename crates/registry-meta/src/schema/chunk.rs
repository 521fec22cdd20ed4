//! Block chunks
//!
//! Sub-parts of a block that a documentation site can preview on their own.
//! They are accepted and validated here but never written to detail
//! artifacts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockChunk {
    pub name: String,
    pub description: String,
    /// Reference to the UI content; any JSON value
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub component: serde_json::Value,
    /// Source file path of the chunk
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<ChunkContainer>,
}

/// Styling of the element wrapping a chunk preview.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkContainer {
    #[serde(default)]
    pub class_name: Option<String>,
}
