//! Validation of registry sources and of entries about to be written

use serde_json::Value;

use crate::error::{Error, Result};
use crate::schema::{Registry, RegistryEntry};

/// Optional entry fields that can be trimmed from a written artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    Description,
    Dependencies,
    DevDependencies,
    RegistryDependencies,
    Files,
    Tailwind,
    CssVars,
    Source,
    Category,
    Subcategory,
    Chunks,
}

impl EntryField {
    /// JSON key of the field.
    pub fn key(&self) -> &'static str {
        match self {
            EntryField::Description => "description",
            EntryField::Dependencies => "dependencies",
            EntryField::DevDependencies => "devDependencies",
            EntryField::RegistryDependencies => "registryDependencies",
            EntryField::Files => "files",
            EntryField::Tailwind => "tailwind",
            EntryField::CssVars => "cssVars",
            EntryField::Source => "source",
            EntryField::Category => "category",
            EntryField::Subcategory => "subcategory",
            EntryField::Chunks => "chunks",
        }
    }
}

/// Fields that only matter to the documentation site and never reach a
/// `<name>.json` artifact.
pub const DETAIL_OMITTED_FIELDS: [EntryField; 4] = [
    EntryField::Source,
    EntryField::Category,
    EntryField::Subcategory,
    EntryField::Chunks,
];

/// Validate a raw registry document into a [`Registry`].
///
/// The document must be an array whose elements each match the entry
/// schema. Unknown keys are dropped; unknown kinds and malformed file
/// references are rejected with the index (and name, when readable) of the
/// offending entry.
pub fn validate_list(raw: Value) -> Result<Registry> {
    let Value::Array(items) = raw else {
        return Err(Error::InvalidRegistry {
            message: format!("expected an array of entries, found {}", value_kind(&raw)),
        });
    };

    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let label = entry_label(index, &item);
        let entry: RegistryEntry =
            serde_json::from_value(item).map_err(|e| Error::invalid_entry(label, e.to_string()))?;
        entries.push(entry);
    }

    tracing::debug!(entries = entries.len(), "validated registry");
    Ok(Registry::new(entries))
}

/// Validate one entry for persistence and return it with `omitted` removed.
///
/// Beyond the structural shape enforced by the types, an entry must have a
/// name usable as a single file name and no file reference with an empty
/// path.
pub fn validate_and_trim(entry: &RegistryEntry, omitted: &[EntryField]) -> Result<Value> {
    registry_fs::validate_path_identifier(&entry.name)
        .map_err(|e| Error::invalid_entry(entry.name.clone(), e.to_string()))?;

    if let Some(position) = entry.files().iter().position(|f| f.path().trim().is_empty()) {
        return Err(Error::invalid_entry(
            entry.name.clone(),
            format!("file #{position} has an empty path"),
        ));
    }

    let mut value = serde_json::to_value(entry)
        .map_err(|e| Error::invalid_entry(entry.name.clone(), e.to_string()))?;
    if let Value::Object(map) = &mut value {
        for field in omitted {
            map.remove(field.key());
        }
    }
    Ok(value)
}

fn entry_label(index: usize, item: &Value) -> String {
    match item.get("name").and_then(Value::as_str) {
        Some(name) => format!("#{index} ({name})"),
        None => format!("#{index}"),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
