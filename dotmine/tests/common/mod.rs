//! Common test utilities for integration tests.
//!
//! This module provides a throwaway home directory with a mine inside it,
//! plus helpers to populate both sides and run the reconciler against them.

use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use dotmine::{Decision, MineRoots, Outcome, Reconciler, Result, ScriptedPrompter};
use tempfile::TempDir;

/// A temporary home directory containing `dotmine/` as its mine.
///
/// Everything is removed when the fixture is dropped.
pub struct MineFixture {
    _dir: TempDir,
    roots: MineRoots,
}

#[allow(dead_code)]
impl MineFixture {
    /// Creates a home with an empty mine.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let home = dir.path().join("home");
        fs::create_dir_all(home.join("dotmine")).unwrap();
        let roots = MineRoots::new(&home, home.join("dotmine")).unwrap();
        Self { _dir: dir, roots }
    }

    /// Creates a home whose mine has not been created yet.
    pub fn without_mine() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let home = dir.path().join("home");
        fs::create_dir_all(&home).unwrap();
        let roots = MineRoots::new(&home, home.join("dotmine")).unwrap();
        Self { _dir: dir, roots }
    }

    pub fn roots(&self) -> &MineRoots {
        &self.roots
    }

    /// Absolute path of `relative` below the home directory.
    pub fn home(&self, relative: &str) -> PathBuf {
        self.roots.home().join(relative)
    }

    /// Absolute path of `relative` below the mine.
    pub fn mine(&self, relative: &str) -> PathBuf {
        self.roots.mine().join(relative)
    }

    /// Writes a file, creating its parent directories.
    pub fn write(&self, path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    /// Creates a directory and its parents.
    pub fn mkdir(&self, path: &Path) {
        fs::create_dir_all(path).unwrap();
    }

    /// Creates a symlink at `link` pointing to `target`.
    pub fn link(&self, target: &Path, link: &Path) {
        fs::create_dir_all(link.parent().unwrap()).unwrap();
        symlink(target, link).unwrap();
    }

    /// Adds `relative` (below home) to the mine, answering prompts with
    /// `answers`, and returns the result with the prompter for inspection.
    pub fn add(&self, relative: &str, answers: &[Decision]) -> (Result<Outcome>, ScriptedPrompter) {
        let mut reconciler =
            Reconciler::new(&self.roots, ScriptedPrompter::new(answers.iter().copied()));
        let result = reconciler.add(&self.home(relative));
        (result, reconciler.into_prompter())
    }
}

/// Reads a file to a string.
#[allow(dead_code)]
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// Asserts that `link` is a symlink whose raw target is `target`.
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
