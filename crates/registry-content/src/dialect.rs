//! Grammar selection by file extension

use tree_sitter::Language;

/// Grammar a script module is parsed with.
///
/// Plain TypeScript allows `<T>value` type assertions, which TSX reads as
/// JSX, so `.ts` files cannot share the TSX grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `.ts`, `.mts`, `.cts`
    TypeScript,
    /// `.tsx` and JavaScript (`.jsx`, `.js`, `.mjs`, `.cjs`)
    Tsx,
}

impl Dialect {
    /// Dialect of a registry path, `None` for files that are not scripts.
    pub fn from_path(path: &str) -> Option<Self> {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        let extension = match file_name.rfind('.') {
            Some(idx) if idx > 0 => file_name[idx + 1..].to_ascii_lowercase(),
            _ => return None,
        };
        match extension.as_str() {
            "ts" | "mts" | "cts" => Some(Dialect::TypeScript),
            "tsx" | "jsx" | "js" | "mjs" | "cjs" => Some(Dialect::Tsx),
            _ => None,
        }
    }

    pub(crate) fn language(self) -> Language {
        match self {
            Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}
