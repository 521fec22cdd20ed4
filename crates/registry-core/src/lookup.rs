//! `index.tsx` lookup index builder
//!
//! Generates a module exporting `Index`, a table from entry name to its
//! metadata and a `React.lazy` import of the entry's first file:
//!
//! ```text
//! "alert": {
//!   name: "alert",
//!   ...
//!   component: React.lazy(() => import("@/registry/ui/alert")),
//!   ...
//! },
//! ```

use std::collections::HashMap;
use std::fmt::Write as _;

use registry_fs::NormalizedPath;
use registry_meta::{Registry, RegistryEntry};

use crate::report::{Artifact, Diagnostic};
use crate::{Error, Result};

/// File name of the generated module inside the index directory.
pub const LOOKUP_FILE: &str = "index.tsx";

/// Root every listed file path is prefixed with.
const REGISTRY_ROOT: &str = "registry";

/// Import alias of the registry root in the consuming application.
const IMPORT_ROOT: &str = "@/registry";

/// Extensions dropped from import specifiers.
const MODULE_EXTENSIONS: [&str; 4] = [".tsx", ".ts", ".jsx", ".js"];

const HEADER: &str = r#"// @ts-nocheck
// This file is autogenerated by the registry builder.
// Do not edit this file directly.
import * as React from "react"

export const Index: Record<string, any> = {"#;

/// Render the lookup module for `registry`.
///
/// Entries without files are left out. When names repeat, the later entry's
/// record replaces the earlier one in place.
pub fn render_lookup_index(
    registry: &Registry,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<String> {
    let mut records: Vec<String> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for entry in registry {
        if !entry.has_files() {
            tracing::debug!(entry = %entry.name, "no files, leaving out of lookup index");
            diagnostics.push(Diagnostic::NoFiles {
                entry: entry.name.clone(),
            });
            continue;
        }

        let record = render_record(entry)?;
        match positions.get(entry.name.as_str()) {
            Some(&position) => {
                tracing::warn!(entry = %entry.name, "duplicate name, replacing earlier lookup record");
                diagnostics.push(Diagnostic::DuplicateName {
                    name: entry.name.clone(),
                });
                records[position] = record;
            }
            None => {
                positions.insert(entry.name.as_str(), records.len());
                records.push(record);
            }
        }
    }

    let mut index = String::from(HEADER);
    for record in &records {
        index.push_str(record);
    }
    index.push_str("\n}\n");
    Ok(index)
}

/// Render the lookup module and replace `<index_dir>/index.tsx` with it.
pub fn write_lookup_index(
    registry: &Registry,
    index_dir: &NormalizedPath,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Artifact> {
    let index = render_lookup_index(registry, diagnostics)?;
    let artifact = Artifact::write(&index_dir.join(LOOKUP_FILE), &index)?;
    tracing::info!(path = %artifact.path, "wrote lookup index");
    Ok(artifact)
}

/// Import specifier of a registry-relative module path.
pub fn module_specifier(component_path: &str) -> String {
    let module = MODULE_EXTENSIONS
        .iter()
        .find_map(|ext| component_path.strip_suffix(ext))
        .unwrap_or(component_path);
    format!("{IMPORT_ROOT}/{module}")
}

fn render_record(entry: &RegistryEntry) -> Result<String> {
    let files: Vec<String> = entry
        .files()
        .iter()
        .map(|file| literal(&format!("{REGISTRY_ROOT}/{}", file.path())))
        .collect::<Result<_>>()?;

    let registry_dependencies = match &entry.registry_dependencies {
        Some(dependencies) => serde_json::to_string(dependencies).map_err(serialize_error)?,
        None => "undefined".to_string(),
    };

    let name = literal(&entry.name)?;
    let mut record = String::new();
    // Writing to a String cannot fail
    let _ = write!(
        record,
        r#"
{name}: {{
  name: {name},
  description: {description},
  type: "{kind}",
  registryDependencies: {registry_dependencies},
  files: [{files}],
  component: React.lazy(() => import({import})),
  source: "",
  category: {category},
  subcategory: {subcategory},
  chunks: []
}},"#,
        description = literal(entry.description.as_deref().unwrap_or_default())?,
        kind = entry.item_type,
        files = files.join(","),
        import = literal(&module_specifier(&entry.component_path()))?,
        category = literal(entry.category.as_deref().unwrap_or_default())?,
        subcategory = literal(entry.subcategory.as_deref().unwrap_or_default())?,
    );
    Ok(record)
}

/// Double-quoted, escaped string literal.
fn literal(value: &str) -> Result<String> {
    serde_json::to_string(value).map_err(serialize_error)
}

fn serialize_error(source: serde_json::Error) -> Error {
    Error::Serialize {
        artifact: LOOKUP_FILE.to_string(),
        source,
    }
}
