#![allow(dead_code)]

//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test platform context
///
/// Creates a temporary platform directory (platform.json + boards/), a
/// packages directory and an empty config directory, and runs the binary
/// against them.
pub struct TestPlatform {
    /// Temporary root holding every directory
    pub dir: TempDir,
}

impl TestPlatform {
    /// Create a platform seeded with the repository's platform definition
    pub fn new() -> Self {
        let project = Self::empty();
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        project.create_file(
            "platform/platform.json",
            &std::fs::read_to_string(root.join("platform.json")).expect("Failed to read platform.json"),
        );
        for board in ["cc1310_launchxl", "cc1350_launchxl"] {
            let name = format!("boards/{board}.json");
            let content = std::fs::read_to_string(root.join(&name)).expect("Failed to read board");
            project.create_file(&format!("platform/{name}"), &content);
        }
        project
    }

    /// Create a platform with only the directory skeleton
    pub fn empty() -> Self {
        let project = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        project.create_dir("platform");
        project.create_dir("packages");
        project.create_dir("config");
        project
    }

    /// Get the path to the temporary root
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Platform directory
    pub fn platform_dir(&self) -> PathBuf {
        self.dir.path().join("platform")
    }

    /// Installed packages directory
    pub fn packages_dir(&self) -> PathBuf {
        self.dir.path().join("packages")
    }

    /// Create a file under the temporary root
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory under the temporary root
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Add a board manifest
    pub fn add_board(&self, id: &str, manifest: &str) {
        self.create_file(&format!("platform/boards/{id}.json"), manifest);
    }

    /// Install the Energia framework package with the given version
    pub fn install_framework(&self, version: &str) -> PathBuf {
        let name = "packages/framework-energiaticc13x0";
        self.create_file(
            &format!("{name}/package.json"),
            &format!(r#"{{"name": "framework-energiaticc13x0", "version": "{version}"}}"#),
        );
        self.dir.path().join(name)
    }

    /// Run the binary with the given arguments
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_ticc13x0"))
            .current_dir(self.path())
            .env("TICC13X0_CONFIG_DIR", self.dir.path().join("config"))
            .env_remove("TICC13X0_PLATFORM_DIR")
            .env_remove("TICC13X0_PACKAGES_DIR")
            .env_remove("RUST_LOG")
            .arg("--platform-dir")
            .arg(self.platform_dir())
            .arg("--packages-dir")
            .arg(self.packages_dir())
            .args(args)
            .output()
            .expect("Failed to execute ticc13x0")
    }

    /// Run the binary and parse its stdout as JSON
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "Command {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON")
    }
}

impl Default for TestPlatform {
    fn default() -> Self {
        Self::new()
    }
}
