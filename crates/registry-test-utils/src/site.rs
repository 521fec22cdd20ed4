//! [`TestSite`] builder for registry build scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use registry_fs::NormalizedPath;
use serde_json::Value;
use tempfile::TempDir;

/// A temporary project directory laid out the way the builder expects:
///
/// ```text
/// <root>/
///   registry.json
///   registry/          sources
///   public/r/          index.json, <name>.json
///   __registry__/      index.tsx
/// ```
///
/// # Example
///
/// ```rust,no_run
/// use registry_test_utils::TestSite;
///
/// let site = TestSite::new();
/// site.write_source("ui/alert.tsx", "export function Alert() {}\n");
/// site.write_registry(&serde_json::json!([
///     { "name": "alert", "type": "registry:ui", "files": ["ui/alert.tsx"] }
/// ]));
/// ```
pub struct TestSite {
    temp_dir: TempDir,
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSite {
    /// Create an empty temporary project.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestSite::new: failed to create temp dir"),
        }
    }

    /// Root of the project.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Root of the project as a [`NormalizedPath`].
    pub fn normalized_root(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    pub fn registry_dir(&self) -> NormalizedPath {
        self.normalized_root().join("registry")
    }

    pub fn output_dir(&self) -> NormalizedPath {
        self.normalized_root().join("public/r")
    }

    pub fn index_dir(&self) -> NormalizedPath {
        self.normalized_root().join("__registry__")
    }

    /// Write `content` to `path` relative to the project root, creating
    /// parent directories.
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Write a source file under `registry/`.
    pub fn write_source(&self, path: &str, content: &str) -> PathBuf {
        self.write_file(&format!("registry/{path}"), content)
    }

    /// Write `registry.json` at the project root.
    pub fn write_registry(&self, entries: &Value) -> PathBuf {
        self.write_file(
            "registry.json",
            &serde_json::to_string_pretty(entries).unwrap(),
        )
    }

    /// Read a file relative to the project root.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Read and parse a JSON file relative to the project root.
    pub fn read_json(&self, path: &str) -> Value {
        let content = self.read(path);
        serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("{path} is not valid JSON: {e}\n{content}"))
    }

    /// Assert that `path` (relative to the root) exists.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` contains `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {path} does not contain expected content.\nExpected: {content}\nActual: {file_content}"
        );
    }
}
