//! UI registry builder CLI
//!
//! Generates the manifest, detail files and lookup index of a component
//! registry.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} UI registry builder", "registry".green().bold());
            println!();
            println!("Run {} for available commands.", "registry --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::Build(args) => commands::run_build(&cwd, &args),
        Commands::Validate { registry } => commands::run_validate(&cwd, registry.as_deref()),
        Commands::List { registry, kind } => {
            commands::run_list(&cwd, registry.as_deref(), kind.as_deref())
        }
        Commands::Completions { shell } => {
            commands::run_completions(shell);
            Ok(())
        }
    }
}
