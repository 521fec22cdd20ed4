//! Build report and per-artifact bookkeeping

use std::fmt;

use registry_fs::{NormalizedPath, compute_content_checksum, io};
use serde::Serialize;

use crate::Result;

/// A file written by the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub path: String,
    /// `sha256:<hex>` of the written bytes
    pub checksum: String,
}

impl Artifact {
    /// Atomically replace the file at `path` with `content`.
    pub fn write(path: &NormalizedPath, content: &str) -> Result<Self> {
        io::write_text(path, content)?;
        tracing::debug!(path = %path, bytes = content.len(), "wrote artifact");
        Ok(Self {
            path: path.to_string(),
            checksum: compute_content_checksum(content),
        })
    }
}

/// Something the build tolerated but a caller may want to know about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Diagnostic {
    /// A referenced source file could not be read and was left out
    MissingFile {
        entry: String,
        path: String,
        reason: String,
    },
    /// An entry failed validation; no detail artifact was written
    InvalidEntry { entry: String, reason: String },
    /// A later entry replaced an earlier one in the lookup index
    DuplicateName { name: String },
    /// An entry without files was left out of the lookup index
    NoFiles { entry: String },
}

impl Diagnostic {
    /// Name of the entry the diagnostic is about.
    pub fn entry(&self) -> &str {
        match self {
            Diagnostic::MissingFile { entry, .. }
            | Diagnostic::InvalidEntry { entry, .. }
            | Diagnostic::NoFiles { entry } => entry,
            Diagnostic::DuplicateName { name } => name,
        }
    }

    /// Whether the diagnostic points at a likely authoring mistake.
    pub fn is_warning(&self) -> bool {
        !matches!(self, Diagnostic::NoFiles { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingFile {
                entry,
                path,
                reason,
            } => write!(f, "{entry}: skipped missing file {path} ({reason})"),
            Diagnostic::InvalidEntry { entry, reason } => {
                write!(f, "{entry}: not written, {reason}")
            }
            Diagnostic::DuplicateName { name } => {
                write!(f, "{name}: duplicate name, last entry wins in the lookup index")
            }
            Diagnostic::NoFiles { entry } => write!(f, "{entry}: no files, not in the lookup index"),
        }
    }
}

/// Everything one build wrote, plus what it skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub manifest: Artifact,
    pub details: Vec<Artifact>,
    pub lookup: Artifact,
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildReport {
    /// Diagnostics that are warnings.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }

    /// True when nothing was skipped for a reason worth warning about.
    pub fn is_clean(&self) -> bool {
        self.warnings().next().is_none()
    }

    /// Entries whose detail artifact was not written.
    pub fn skipped_entries(&self) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::InvalidEntry { .. }))
            .map(Diagnostic::entry)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_serializes_with_kind_tag() {
        let diagnostic = Diagnostic::MissingFile {
            entry: "alert".into(),
            path: "ui/missing.tsx".into(),
            reason: "not found".into(),
        };
        let json = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(json["kind"], "missing-file");
        assert_eq!(json["path"], "ui/missing.tsx");
    }

    #[test]
    fn test_no_files_is_not_a_warning() {
        let report = BuildReport {
            manifest: Artifact {
                path: "index.json".into(),
                checksum: String::new(),
            },
            details: Vec::new(),
            lookup: Artifact {
                path: "index.tsx".into(),
                checksum: String::new(),
            },
            diagnostics: vec![Diagnostic::NoFiles {
                entry: "theme".into(),
            }],
        };
        assert!(report.is_clean());
        assert!(report.skipped_entries().is_empty());
    }
}
