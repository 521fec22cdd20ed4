//! Style configuration carried through to consumers untouched

use serde::{Deserialize, Serialize};

/// Tailwind configuration fragment an entry contributes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TailwindConfig {
    pub config: TailwindSettings,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TailwindSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<String>>,
}

/// CSS custom properties per color scheme, in authored order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CssVars {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<serde_json::Map<String, serde_json::Value>>,
}
