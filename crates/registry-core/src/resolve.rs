//! File content resolution
//!
//! Reads a referenced source file, strips preview directives and fills in
//! the install target for `v0-` entries.

use registry_content::{Dialect, strip_preview_directives};
use registry_fs::{NormalizedPath, io};
use registry_meta::{FileObject, FileRef, RegistryEntry};

use crate::{Error, Result};

/// Name prefix of externally imported entries that need explicit install
/// targets.
pub const V0_PREFIX: &str = "v0-";

/// Read access to registry source files by their registry-relative path.
pub trait SourceReader {
    /// Read the file at `path`, relative to the registry root.
    fn read(&self, path: &str) -> registry_fs::Result<String>;
}

/// Reads sources from a directory on disk (`registry/` by default).
#[derive(Debug, Clone)]
pub struct FsSourceReader {
    root: NormalizedPath,
}

impl FsSourceReader {
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self { root: root.into() }
    }
}

impl SourceReader for FsSourceReader {
    fn read(&self, path: &str) -> registry_fs::Result<String> {
        io::read_text(&self.root.join(path))
    }
}

/// Outcome of resolving one file reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Content read and stripped, target filled in where applicable
    Resolved(FileObject),
    /// The source could not be read; the file is left out of the artifact
    Skipped { path: String, reason: String },
}

impl Resolution {
    pub fn into_resolved(self) -> Option<FileObject> {
        match self {
            Resolution::Resolved(file) => Some(file),
            Resolution::Skipped { .. } => None,
        }
    }
}

/// Resolve `file` as declared by `owner`.
///
/// Unreadable sources yield [`Resolution::Skipped`]; sources that fail to
/// parse abort with [`Error::Content`].
pub fn resolve_file(
    file: &FileRef,
    owner: &RegistryEntry,
    reader: &(impl SourceReader + ?Sized),
) -> Result<Resolution> {
    let mut file = file.normalize(owner.item_type);

    let raw = match reader.read(&file.path) {
        Ok(raw) => raw,
        Err(e) => {
            return Ok(Resolution::Skipped {
                path: file.path,
                reason: e.to_string(),
            });
        }
    };

    let content = match Dialect::from_path(&file.path) {
        Some(dialect) => {
            strip_preview_directives(&raw, dialect)
                .map_err(|source| Error::Content {
                    path: file.path.clone(),
                    source,
                })?
                .content
        }
        None => raw,
    };

    file.target = install_target(&owner.name, &file);
    file.content = Some(content);
    Ok(Resolution::Resolved(file))
}

/// Install target of `file` for an entry named `entry_name`.
///
/// An explicit target is kept. Otherwise `v0-` entries get
/// `<install dir of the file's kind>/<file name>`; everything else keeps
/// whatever (possibly empty) target it had.
pub fn install_target(entry_name: &str, file: &FileObject) -> Option<String> {
    if let Some(target) = file.explicit_target() {
        return Some(target.to_string());
    }
    if !entry_name.starts_with(V0_PREFIX) {
        return file.target.clone();
    }

    let path = NormalizedPath::new(&file.path);
    match path.file_name() {
        Some(file_name) => Some(format!("{}/{}", file.item_type.install_dir(), file_name)),
        None => file.target.clone(),
    }
}
