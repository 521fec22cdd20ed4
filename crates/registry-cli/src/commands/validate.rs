//! The validate command

use std::collections::BTreeMap;
use std::path::Path;

use colored::Colorize;
use registry_meta::load_registry;

use crate::context::resolve_registry;
use crate::error::Result;

/// Run the validate command
///
/// Fails when the source does not validate; otherwise prints the entry
/// count per kind and warns about repeated names.
pub fn run_validate(cwd: &Path, registry: Option<&Path>) -> Result<()> {
    let path = resolve_registry(cwd, registry)?;
    let registry = load_registry(&path)?;

    let mut counts = BTreeMap::new();
    for entry in &registry {
        *counts.entry(entry.item_type).or_insert(0usize) += 1;
    }

    println!("{} {} ({} entries)", "Valid:".green().bold(), path, registry.len());
    for (kind, count) in counts {
        println!("  {:<18} {}", kind.to_string().cyan(), count);
    }

    for name in registry.duplicate_names() {
        eprintln!("{} duplicate entry name '{}'", "warning:".yellow().bold(), name);
    }
    Ok(())
}
