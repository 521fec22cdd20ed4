//! The build command

use std::path::Path;

use colored::Colorize;
use registry_core::{BuildReport, RegistryBuilder};
use registry_meta::load_registry;

use crate::cli::BuildArgs;
use crate::context::resolve_build;
use crate::error::Result;

/// Run the build command
pub fn run_build(cwd: &Path, args: &BuildArgs) -> Result<()> {
    let context = resolve_build(cwd, args)?;
    let registry = load_registry(&context.registry)?;
    let report = RegistryBuilder::new(context.options).build(&registry)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report, registry.len());
    }
    Ok(())
}

fn print_summary(report: &BuildReport, entries: usize) {
    for diagnostic in report.warnings() {
        eprintln!("{} {}", "warning:".yellow().bold(), diagnostic);
    }

    println!("{} {} entries", "Built".green().bold(), entries);
    println!("  {:<9} {}", "manifest".cyan(), report.manifest.path);
    println!("  {:<9} {} files", "details".cyan(), report.details.len());
    println!("  {:<9} {}", "lookup".cyan(), report.lookup.path);

    let skipped = report.skipped_entries();
    if !skipped.is_empty() {
        println!("{} {}", "Skipped:".dimmed(), skipped.join(", "));
    }
}
