//! Test utilities for creating temporary source trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory with a `src/` source root.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new project directory with an empty `src/`.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("src")).expect("Failed to create src dir");
        Self { dir }
    }

    /// Project directory (parent of the source root).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The source root, `<project>/src`.
    pub fn src(&self) -> PathBuf {
        self.dir.path().join("src")
    }

    /// Add a file below the source root.
    ///
    /// Creates parent directories as needed.
    pub fn add_source(&self, path: &str, content: &str) -> PathBuf {
        self.add_file(&format!("src/{}", path), content)
    }

    /// Add a file relative to the project directory.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Read a file below the source root.
    pub fn read_source(&self, path: &str) -> String {
        fs::read_to_string(self.src().join(path)).expect("Failed to read file")
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
