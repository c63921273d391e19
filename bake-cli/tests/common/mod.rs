//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers isolated from the user's configuration
//! - Test data fixtures

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables read by bake that must not leak into tests.
const BAKE_ENV_VARS: &[&str] = &[
    "BAKE_VERBOSITY",
    "BAKE_CASE_SENSITIVE",
    "BAKE_INCLUDE_HIDDEN",
    "BAKE_PROCESS_TIMEOUT_MS",
    "BAKE_PROCESS_SILENT",
];

/// Test environment with an isolated working directory and home.
///
/// Layout under the temporary directory:
/// - `home/`: used as `$HOME`, so no user config is picked up
/// - `bake.yaml`: an empty project config that stops the upward search
/// - `work/`: the working directory for every command
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path of the temporary directory
    pub root: PathBuf,
    /// Working directory for commands
    pub work: PathBuf,
    /// Home directory for commands
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        let work = root.join("work");
        let home = root.join("home");
        fs::create_dir_all(&work).expect("Failed to create work dir");
        fs::create_dir_all(&home).expect("Failed to create home dir");
        fs::write(root.join("bake.yaml"), "{}\n").expect("Failed to write bake.yaml");

        Self {
            temp_dir,
            root,
            work,
            home,
        }
    }

    /// Get a command builder running in the work directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("bake").expect("Failed to find bake binary");
        cmd.current_dir(&self.work).env("HOME", &self.home);
        for var in BAKE_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Create a file (and its parent directories) under the work directory.
    pub fn create_file(&self, relative: &str) -> PathBuf {
        let path = self.work.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, relative).expect("Failed to write test file");
        path
    }

    /// Create a directory under the work directory.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.work.join(relative);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write the project configuration.
    pub fn write_project_config(&self, yaml: &str) {
        fs::write(self.work.join("bake.yaml"), yaml).expect("Failed to write bake.yaml");
    }

    /// Path of `relative` under the work directory, as bake prints it.
    pub fn display(&self, relative: &str) -> String {
        to_bake_path(&self.work.join(relative))
    }
}

/// Render a host path the way bake prints paths (forward slashes).
pub fn to_bake_path(path: &Path) -> String {
    path.to_str()
        .expect("Test paths are UTF-8")
        .replace('\\', "/")
}

/// Split stdout into its lines.
pub fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("Invalid UTF-8 in output")
        .lines()
        .map(str::to_string)
        .collect()
}
