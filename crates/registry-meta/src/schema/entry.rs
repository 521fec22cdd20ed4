//! Registry entries and the registry itself

use serde::{Deserialize, Serialize};

use super::{BlockChunk, CssVars, FileObject, FileRef, ItemType, TailwindConfig};

/// One distributable unit: a component, hook, helper, block or example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    /// Unique identifier, used for artifact file names and lookup keys
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_dependencies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tailwind: Option<TailwindConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_vars: Option<CssVars>,
    /// Provenance of the entry; never written to detail artifacts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<BlockChunk>>,
}

impl RegistryEntry {
    /// Create a bare entry with only the required fields set.
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            name: name.into(),
            item_type,
            description: None,
            dependencies: None,
            dev_dependencies: None,
            registry_dependencies: None,
            files: None,
            tailwind: None,
            css_vars: None,
            source: None,
            category: None,
            subcategory: None,
            chunks: None,
        }
    }

    /// Builder-style helper to set the file list.
    pub fn with_files<I, F>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FileRef>,
    {
        self.files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    /// Declared files, empty when the entry has none.
    pub fn files(&self) -> &[FileRef] {
        self.files.as_deref().unwrap_or_default()
    }

    /// Whether the entry declares at least one file.
    pub fn has_files(&self) -> bool {
        !self.files().is_empty()
    }

    /// Declared files in structured form, kinds defaulted to the entry's.
    pub fn normalized_files(&self) -> Option<Vec<FileObject>> {
        self.files
            .as_ref()
            .map(|files| files.iter().map(|f| f.normalize(self.item_type)).collect())
    }

    /// Module path of the entry's primary implementation, relative to the
    /// registry root: the first declared file, or `<kind>/<name>`.
    pub fn component_path(&self) -> String {
        match self.files().first() {
            Some(file) => file.path().to_string(),
            None => format!("{}/{}", self.item_type.kind(), self.name),
        }
    }
}

/// The full ordered list of entries handed to one build.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    pub fn new(entries: Vec<RegistryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RegistryEntry> {
        self.entries.iter()
    }

    /// Entries of one of the given kinds, in registry order.
    pub fn of_kinds<'a>(
        &'a self,
        kinds: &'a [ItemType],
    ) -> impl Iterator<Item = &'a RegistryEntry> + 'a {
        self.entries
            .iter()
            .filter(move |entry| kinds.contains(&entry.item_type))
    }

    /// Names registered more than once, in order of first repetition.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for entry in &self.entries {
            if !seen.insert(entry.name.as_str()) && !duplicates.contains(&entry.name.as_str()) {
                duplicates.push(entry.name.as_str());
            }
        }
        duplicates
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<RegistryEntry>> for Registry {
    fn from(entries: Vec<RegistryEntry>) -> Self {
        Self::new(entries)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a RegistryEntry;
    type IntoIter = std::slice::Iter<'a, RegistryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
