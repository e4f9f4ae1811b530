//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - A test environment with its own home directory
//! - Command builder helpers
//! - Filesystem fixture helpers

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated home directory.
///
/// `HOME` points at a fresh temporary directory for every command, and the
/// `DOTMINE_*` variables of the surrounding environment are removed, so the
/// default mine is `<home>/dotmine`.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// The isolated home directory
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with an empty home directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().join("home");
        fs::create_dir_all(&home).expect("Failed to create home dir");

        Self { temp_dir, home }
    }

    /// Get a command builder running in the isolated home.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("dotmine").expect("Failed to find dotmine binary");
        cmd.env("HOME", &self.home)
            .env_remove("DOTMINE_DIR")
            .env_remove("DOTMINE_CONFIG")
            .env_remove("DOTMINE_LOG_MODE")
            .current_dir(&self.home);
        cmd
    }

    /// Path below the home directory.
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home.join(relative)
    }

    /// Path below the default mine.
    pub fn mine_path(&self, relative: &str) -> PathBuf {
        self.home.join("dotmine").join(relative)
    }

    /// A path outside the home directory.
    pub fn outside_path(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    /// Write a file, creating parent directories.
    pub fn write(&self, path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    /// Create a symlink, creating parent directories.
    pub fn link(&self, target: &Path, link: &Path) {
        fs::create_dir_all(link.parent().unwrap()).unwrap();
        symlink(target, link).unwrap();
    }

    /// Run `dotmine add <path>` and assert success.
    pub fn add(&self, path: &Path) {
        self.command().arg("add").arg(path).assert().success();
    }
}

/// Assert that `link` is a symlink to `target`.
#[allow(dead_code)]
pub fn assert_links_to(link: &Path, target: &Path) {
    let metadata = fs::symlink_metadata(link).unwrap();
    assert!(
        metadata.file_type().is_symlink(),
        "{} is not a symlink",
        link.display()
    );
    assert_eq!(fs::read_link(link).unwrap(), target);
}
