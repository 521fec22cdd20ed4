//! The list command

use std::path::Path;

use colored::Colorize;
use registry_meta::{ItemType, load_registry};

use crate::context::resolve_registry;
use crate::error::Result;

/// Run the list command
pub fn run_list(cwd: &Path, registry: Option<&Path>, kind: Option<&str>) -> Result<()> {
    let filter = kind.map(str::parse::<ItemType>).transpose()?;
    let path = resolve_registry(cwd, registry)?;
    let registry = load_registry(&path)?;

    let mut shown = 0;
    for entry in registry
        .iter()
        .filter(|e| filter.is_none_or(|kind| e.item_type == kind))
    {
        let files = entry.files().len();
        println!(
            "  {:<24} {:<18} {}",
            entry.name.green(),
            entry.item_type.as_str(),
            format!("{files} file{}", if files == 1 { "" } else { "s" }).dimmed()
        );
        shown += 1;
    }

    println!();
    println!("{} {} entries", "Total:".dimmed(), shown);
    Ok(())
}
