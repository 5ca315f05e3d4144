//! Common test utilities for CLI testing.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

use assert_cmd::Command;
use taskmd_test_utils::ManifestDir;

/// Environment variables that would leak the caller's setup into a run.
const ISOLATED_VARS: &[&str] = &[
    "TASKMD_CONFIG",
    "TASKMD_OUTPUT_DIR",
    "TASKMD_KUSTOMIZE",
    "TASKMD_LOG_LEVEL",
    "TASKMD_LOG_FORMAT",
    "RUST_LOG",
];

/// Test context with a temporary working directory.
pub struct TestContext {
    pub dir: ManifestDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            dir: ManifestDir::new(),
        }
    }

    /// Get path to temp directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Default output directory inside the context.
    pub fn out(&self) -> PathBuf {
        self.path().join("taskmd.out")
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        self.dir.write(name, contents)
    }

    /// Create a command for `bin`, run from the context directory.
    pub fn command(&self, bin: &str) -> Command {
        let mut cmd = Command::cargo_bin(bin).expect("Binary not found");
        cmd.current_dir(self.path());
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Every file under the output directory as (relative path, bytes), sorted.
    pub fn snapshot_output(&self) -> Vec<(PathBuf, Vec<u8>)> {
        let mut files = Vec::new();
        collect(&self.out(), &self.out(), &mut files);
        files.sort();
        files
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

fn collect(root: &Path, dir: &Path, files: &mut Vec<(PathBuf, Vec<u8>)>) {
    for entry in std::fs::read_dir(dir).expect("Failed to read output dir") {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            collect(root, &path, files);
        } else {
            let relative = path.strip_prefix(root).unwrap().to_path_buf();
            files.push((relative, std::fs::read(&path).unwrap()));
        }
    }
}

/// Assert helpers for CLI output
pub trait OutputAssertions {
    fn assert_success(&self);
    fn assert_failure(&self);
    fn assert_stderr_contains(&self, text: &str);
    fn assert_exit_code(&self, code: i32);
}

impl OutputAssertions for Output {
    fn assert_success(&self) {
        assert!(
            self.status.success(),
            "Command failed with status: {}\nstderr: {}",
            self.status,
            String::from_utf8_lossy(&self.stderr)
        );
    }

    fn assert_failure(&self) {
        assert!(
            !self.status.success(),
            "Command succeeded unexpectedly\nstdout: {}",
            String::from_utf8_lossy(&self.stdout)
        );
    }

    fn assert_stderr_contains(&self, text: &str) {
        let stderr = String::from_utf8_lossy(&self.stderr);
        assert!(
            stderr.contains(text),
            "stderr did not contain '{}'\nstderr: {}",
            text,
            stderr
        );
    }

    fn assert_exit_code(&self, code: i32) {
        assert_eq!(
            self.status.code(),
            Some(code),
            "Expected exit code {}, got {:?}",
            code,
            self.status.code()
        );
    }
}
