//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Registry builder - Generate distributable artifacts for a UI component registry
#[derive(Parser, Debug)]
#[command(name = "registry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate index.json, the per-entry detail files and index.tsx
    ///
    /// Settings come from registry.toml in the current directory, if
    /// present; flags override them.
    ///
    /// Examples:
    ///   registry build
    ///   registry build --out dist/r --include ui --include block
    ///   registry build --strict --json
    Build(BuildArgs),

    /// Validate the registry source and summarize it
    Validate {
        /// Registry source document
        #[arg(long, env = "REGISTRY_SOURCE")]
        registry: Option<PathBuf>,
    },

    /// List registry entries
    List {
        /// Registry source document
        #[arg(long, env = "REGISTRY_SOURCE")]
        registry: Option<PathBuf>,

        /// Only list entries of this kind (e.g. ui, registry:hook)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   registry completions bash > ~/.local/share/bash-completion/completions/registry
    ///   registry completions zsh > ~/.zfunc/_registry
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Flags of the build command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildArgs {
    /// Configuration file (defaults to ./registry.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Registry source document
    #[arg(long, env = "REGISTRY_SOURCE")]
    pub registry: Option<PathBuf>,

    /// Root directory file references are resolved against
    #[arg(long)]
    pub registry_dir: Option<PathBuf>,

    /// Directory receiving index.json and <name>.json
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Directory receiving index.tsx
    #[arg(long)]
    pub index_dir: Option<PathBuf>,

    /// Kinds listed in index.json; repeat for several
    #[arg(long)]
    pub include: Vec<String>,

    /// Fail on duplicate entry names
    #[arg(long)]
    pub strict: bool,

    /// Print the build report as JSON
    #[arg(long)]
    pub json: bool,
}
