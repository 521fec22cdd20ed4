//! Build orchestration
//!
//! [`RegistryBuilder`] runs the three artifact builders over one registry
//! and collects what they wrote and skipped into a [`BuildReport`].

use std::path::Path;

use registry_fs::NormalizedPath;
use registry_meta::{BuildConfig, ItemType, Registry};

use crate::detail::write_details;
use crate::lookup::write_lookup_index;
use crate::manifest::write_manifest;
use crate::report::BuildReport;
use crate::resolve::{FsSourceReader, SourceReader};
use crate::{Error, Result};

/// Where one build reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Root that file references are resolved against
    pub registry_dir: NormalizedPath,
    /// Receives `index.json` and the detail files
    pub output_dir: NormalizedPath,
    /// Receives `index.tsx`
    pub index_dir: NormalizedPath,
    /// Kinds listed in the manifest
    pub include: Vec<ItemType>,
    /// Fail on duplicate names instead of letting the last entry win
    pub strict: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            registry_dir: NormalizedPath::new("registry"),
            output_dir: NormalizedPath::new("public/r"),
            index_dir: NormalizedPath::new("__registry__"),
            include: vec![ItemType::Ui, ItemType::Hook, ItemType::Lib],
            strict: false,
        }
    }
}

impl BuildOptions {
    /// Options from a `[build]` table, relative directories taken from `root`.
    pub fn from_config(root: &NormalizedPath, config: &BuildConfig) -> Result<Self> {
        Ok(Self {
            registry_dir: anchor(root, &config.registry_dir),
            output_dir: anchor(root, &config.output_dir),
            index_dir: anchor(root, &config.index_dir),
            include: config.include_kinds()?,
            strict: config.strict,
        })
    }
}

fn anchor(root: &NormalizedPath, dir: &str) -> NormalizedPath {
    if Path::new(dir).is_absolute() {
        NormalizedPath::new(dir)
    } else {
        root.join(dir)
    }
}

/// Generates every registry artifact in one pass.
pub struct RegistryBuilder<R = FsSourceReader> {
    options: BuildOptions,
    reader: R,
}

impl RegistryBuilder<FsSourceReader> {
    /// Builder reading sources from `options.registry_dir`.
    pub fn new(options: BuildOptions) -> Self {
        let reader = FsSourceReader::new(options.registry_dir.clone());
        Self { options, reader }
    }
}

impl<R: SourceReader> RegistryBuilder<R> {
    /// Builder reading sources through `reader`.
    pub fn with_reader(options: BuildOptions, reader: R) -> Self {
        Self { options, reader }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Write the manifest, the detail files and the lookup index.
    ///
    /// The registry is never modified. Missing sources and invalid entries
    /// are reported, not fatal; a source that fails to parse or an output
    /// that cannot be written aborts the build.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] in strict mode before anything is
    /// written.
    pub fn build(&self, registry: &Registry) -> Result<BuildReport> {
        if self.options.strict {
            let duplicates = registry.duplicate_names();
            if !duplicates.is_empty() {
                return Err(Error::DuplicateName {
                    names: duplicates.into_iter().map(String::from).collect(),
                });
            }
        }

        tracing::info!(
            entries = registry.len(),
            output_dir = %self.options.output_dir,
            index_dir = %self.options.index_dir,
            "building registry"
        );

        let mut diagnostics = Vec::new();
        let manifest = write_manifest(registry, &self.options.include, &self.options.output_dir)?;
        let details = write_details(
            registry,
            &self.reader,
            &self.options.output_dir,
            &mut diagnostics,
        )?;
        let lookup = write_lookup_index(registry, &self.options.index_dir, &mut diagnostics)?;

        let report = BuildReport {
            manifest,
            details,
            lookup,
            diagnostics,
        };
        tracing::info!(
            details = report.details.len(),
            warnings = report.warnings().count(),
            "registry built"
        );
        Ok(report)
    }
}
