//! Removal of documentation-only directives from component sources

use crate::dialect::Dialect;
use crate::edit::Edit;
use crate::error::Result;
use crate::module::SourceModule;

/// Top-level declarations read by the documentation preview and never
/// shipped to consumers.
pub const PREVIEW_DIRECTIVES: [&str; 3] = ["iframeHeight", "containerClassName", "description"];

/// Result of stripping a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    pub content: String,
    pub edits: Vec<Edit>,
}

impl Stripped {
    pub fn is_modified(&self) -> bool {
        !self.edits.is_empty()
    }
}

/// Parse `source` and remove every [`PREVIEW_DIRECTIVES`] declaration.
pub fn strip_preview_directives(source: &str, dialect: Dialect) -> Result<Stripped> {
    strip_declarations(source, dialect, &PREVIEW_DIRECTIVES)
}

/// Parse `source` and remove the top-level variables named in `names`.
pub fn strip_declarations(source: &str, dialect: Dialect, names: &[&str]) -> Result<Stripped> {
    let mut module = SourceModule::parse(source, dialect)?;
    for name in names {
        for edit in module.remove_variable_declaration(name)? {
            tracing::debug!(name = %edit.name, kind = ?edit.kind, "removed declaration");
        }
    }

    Ok(Stripped {
        edits: module.edits().to_vec(),
        content: module.into_source(),
    })
}
