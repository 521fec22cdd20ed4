//! Edit types for source modification.

use std::ops::Range;

/// The kind of edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// A whole statement was deleted.
    DeleteStatement,
    /// One declarator was deleted from a multi-declarator statement.
    DeleteDeclarator,
}

/// A deletion applied to a source module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub kind: EditKind,
    /// Declared name that triggered the edit.
    pub name: String,
    /// Byte range in the source the edit was applied to.
    pub range: Range<usize>,
    /// Text that was removed.
    pub removed: String,
}
