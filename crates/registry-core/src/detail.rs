//! `<name>.json` detail file builder

use registry_fs::NormalizedPath;
use registry_meta::{DETAIL_OMITTED_FIELDS, FileRef, Registry, RegistryEntry, validate_and_trim};
use serde_json::Value;

use crate::report::{Artifact, Diagnostic};
use crate::resolve::{Resolution, SourceReader, resolve_file};
use crate::{Error, Result};

/// Resolve the files of `entry` and produce its trimmed detail document.
///
/// Missing sources are dropped from the file list. Returns `None` when the
/// resolved entry fails validation; both cases are recorded in
/// `diagnostics`.
pub fn detail_document(
    entry: &RegistryEntry,
    reader: &(impl SourceReader + ?Sized),
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Option<Value>> {
    let mut resolved = entry.clone();

    if let Some(files) = &entry.files {
        let mut resolved_files = Vec::with_capacity(files.len());
        for file in files {
            match resolve_file(file, entry, reader)? {
                Resolution::Resolved(file) => resolved_files.push(FileRef::Object(file)),
                Resolution::Skipped { path, reason } => {
                    tracing::warn!(entry = %entry.name, path = %path, "skipping unreadable file: {reason}");
                    diagnostics.push(Diagnostic::MissingFile {
                        entry: entry.name.clone(),
                        path,
                        reason,
                    });
                }
            }
        }
        resolved.files = Some(resolved_files);
    }

    match validate_and_trim(&resolved, &DETAIL_OMITTED_FIELDS) {
        Ok(document) => Ok(Some(document)),
        Err(e) => {
            tracing::warn!(entry = %entry.name, "not writing detail file: {e}");
            diagnostics.push(Diagnostic::InvalidEntry {
                entry: entry.name.clone(),
                reason: e.to_string(),
            });
            Ok(None)
        }
    }
}

/// Write `<out_dir>/<name>.json` for every detail-eligible entry.
///
/// Each entry is independent: a skipped entry never affects the others.
pub fn write_details(
    registry: &Registry,
    reader: &(impl SourceReader + ?Sized),
    out_dir: &NormalizedPath,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<Artifact>> {
    let mut artifacts = Vec::new();

    for entry in registry.iter().filter(|e| e.item_type.is_detail_eligible()) {
        let Some(document) = detail_document(entry, reader, diagnostics)? else {
            continue;
        };

        let file_name = format!("{}.json", entry.name);
        let content = serde_json::to_string_pretty(&document).map_err(|source| Error::Serialize {
            artifact: file_name.clone(),
            source,
        })?;
        artifacts.push(Artifact::write(&out_dir.join(&file_name), &content)?);
    }

    tracing::info!(written = artifacts.len(), "wrote detail files");
    Ok(artifacts)
}
