//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create the `root/ {a.txt, .hidden, sub/ {b.txt}}` layout used across tests.
    pub fn sample() -> Self {
        let tree = Self::new();
        tree.add_file("a.txt", "a");
        tree.add_file(".hidden", "secret");
        tree.add_file("sub/b.txt", "b");
        tree
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Add a symlink at `link` pointing to `target`. The target is stored
    /// exactly as given, so relative targets stay relative.
    #[cfg(unix)]
    pub fn add_symlink(&self, target: impl AsRef<Path>, link: &str) -> PathBuf {
        let link_path = self.dir.path().join(link);
        if let Some(parent) = link_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::os::unix::fs::symlink(target, &link_path).expect("Failed to create symlink");
        link_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
