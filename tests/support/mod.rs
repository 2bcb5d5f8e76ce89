//! Test support utilities for encvar integration tests.
//!
//! Provides fixtures, an isolated CLI environment, and output assertions.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working directory and config home, so the
/// default key file never leaks between tests and tests can run in
/// parallel.
pub struct Test {
    /// Working directory for documents and key files
    pub dir: TempDir,
    /// Temporary home / config directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Write a file into the working directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> std::path::PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write test file");
        path
    }

    /// Read a file from the working directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("failed to read test file")
    }
}
