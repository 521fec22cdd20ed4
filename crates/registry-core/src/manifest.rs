//! `index.json` manifest builder

use registry_fs::NormalizedPath;
use registry_meta::{FileRef, ItemType, Registry, RegistryEntry};

use crate::report::Artifact;
use crate::{Error, Result};

/// File name of the manifest inside the output directory.
pub const MANIFEST_FILE: &str = "index.json";

/// Entries of the `include` kinds, in registry order, with every file
/// reference in object form and no contents.
pub fn build_manifest(registry: &Registry, include: &[ItemType]) -> Vec<RegistryEntry> {
    registry
        .of_kinds(include)
        .map(|entry| {
            let mut entry = entry.clone();
            entry.files = entry.normalized_files().map(|files| {
                files
                    .into_iter()
                    .map(|mut file| {
                        file.content = None;
                        FileRef::Object(file)
                    })
                    .collect()
            });
            entry
        })
        .collect()
}

/// Pretty-printed manifest document.
pub fn render_manifest(entries: &[RegistryEntry]) -> Result<String> {
    serde_json::to_string_pretty(entries).map_err(|source| Error::Serialize {
        artifact: MANIFEST_FILE.to_string(),
        source,
    })
}

/// Build the manifest and replace `<out_dir>/index.json` with it.
pub fn write_manifest(
    registry: &Registry,
    include: &[ItemType],
    out_dir: &NormalizedPath,
) -> Result<Artifact> {
    let entries = build_manifest(registry, include);
    let artifact = Artifact::write(&out_dir.join(MANIFEST_FILE), &render_manifest(&entries)?)?;
    tracing::info!(entries = entries.len(), path = %artifact.path, "wrote manifest");
    Ok(artifact)
}
