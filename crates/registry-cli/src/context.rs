//! Project context resolution
//!
//! Merges `registry.toml` with command-line overrides into the paths and
//! options one command runs with. Relative paths are taken from the working
//! directory.

use std::path::Path;

use registry_core::BuildOptions;
use registry_fs::NormalizedPath;
use registry_meta::{BuildConfig, load_config, load_config_file};

use crate::cli::BuildArgs;
use crate::error::Result;

/// Everything `registry build` needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    /// Registry source document
    pub registry: NormalizedPath,
    pub options: BuildOptions,
}

/// Resolve the build context for `args` run from `cwd`.
pub fn resolve_build(cwd: &Path, args: &BuildArgs) -> Result<BuildContext> {
    let root = NormalizedPath::new(cwd);
    let mut config = match &args.config {
        Some(path) => load_config_file(&NormalizedPath::new(cwd.join(path)))?.build,
        None => load_config(&root)?.build,
    };
    apply_overrides(&mut config, args);

    Ok(BuildContext {
        registry: NormalizedPath::new(cwd.join(&config.registry)),
        options: BuildOptions::from_config(&root, &config)?,
    })
}

/// Registry source for read-only commands: the flag, else the configured one.
pub fn resolve_registry(cwd: &Path, registry: Option<&Path>) -> Result<NormalizedPath> {
    let path = match registry {
        Some(path) => cwd.join(path),
        None => cwd.join(load_config(&NormalizedPath::new(cwd))?.build.registry),
    };
    Ok(NormalizedPath::new(path))
}

fn apply_overrides(config: &mut BuildConfig, args: &BuildArgs) {
    let overrides = [
        (&mut config.registry, &args.registry),
        (&mut config.registry_dir, &args.registry_dir),
        (&mut config.output_dir, &args.out),
        (&mut config.index_dir, &args.index_dir),
    ];
    for (setting, flag) in overrides {
        if let Some(path) = flag {
            *setting = path.to_string_lossy().into_owned();
        }
    }

    if !args.include.is_empty() {
        config.include = args.include.clone();
    }
    config.strict |= args.strict;
}
