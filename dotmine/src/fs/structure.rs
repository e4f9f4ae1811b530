//! Creation of a destination's parent directory chain.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::ops;
use crate::prompt::{Decision, Prompt, Prompter};

/// Materializes the ancestor directories of a destination path.
///
/// This is `mkdir -p $(dirname destination)`, except that a non-directory in
/// the way is only removed after the user agrees to it.
///
/// # Examples
///
/// ```no_run
/// use dotmine::fs::StructureBuilder;
/// use dotmine::prompt::TerminalPrompter;
/// use std::path::Path;
///
/// let mut prompter = TerminalPrompter::stdio();
/// let created = StructureBuilder::new(&mut prompter)
///     .ensure_parents(Path::new("/home/user/dotmine/.config/nvim/init.lua"))
///     .unwrap();
/// println!("created {} directories", created.len());
/// ```
pub struct StructureBuilder<P> {
    prompter: P,
}

impl<P: Prompter> StructureBuilder<P> {
    /// Create a builder that asks `prompter` before removing anything.
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }

    /// Ensure every ancestor of `destination` exists as a directory.
    ///
    /// Ancestors are processed from the root towards the leaf; the leaf
    /// itself is left alone. A symlink to a directory counts as a directory.
    /// Returns the directories that were created, in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StructureConflict`] if a non-directory blocks the
    /// chain and the user declines to remove it, and [`Error::IoFailure`] if
    /// inspecting, removing or creating an entry fails.
    pub fn ensure_parents(&mut self, destination: &Path) -> Result<Vec<PathBuf>> {
        let mut chain: Vec<&Path> = destination
            .ancestors()
            .skip(1)
            .filter(|ancestor| !is_root(ancestor))
            .collect();
        chain.reverse();

        let mut created = Vec::new();
        for ancestor in chain {
            if self.ensure_directory(ancestor)? {
                created.push(ancestor.to_path_buf());
            }
        }
        Ok(created)
    }

    /// Returns whether the directory had to be created.
    fn ensure_directory(&mut self, path: &Path) -> Result<bool> {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => {
                log::debug!("`{}` already exists", path.display());
                Ok(false)
            }
            Ok(_) => self.replace_with_directory(path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                // A dangling symlink still occupies the name.
                if fs::symlink_metadata(path).is_ok() {
                    self.replace_with_directory(path)
                } else {
                    ops::create_dir(path)?;
                    Ok(true)
                }
            }
            Err(e) => Err(Error::io("stat", path, e)),
        }
    }

    fn replace_with_directory(&mut self, path: &Path) -> Result<bool> {
        let prompt = Prompt::new(
            format!(
                "a file already exists at `{}`; overwrite it to create the directory structure?",
                path.display()
            ),
            &[Decision::Overwrite, Decision::Abort],
        )
        .with_default(Decision::Abort);

        match self.prompter.choose(&prompt)? {
            Decision::Overwrite => {
                log::info!("removing `{}` to make room for a directory", path.display());
                ops::remove_entry(path)?;
                ops::create_dir(path)?;
                Ok(true)
            }
            _ => Err(Error::StructureConflict {
                path: path.to_path_buf(),
            }),
        }
    }
}

fn is_root(path: &Path) -> bool {
    path.as_os_str().is_empty()
        || path
            .components()
            .all(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use std::os::unix::fs::symlink;
    use tempfile::tempdir;

    #[test]
    fn test_creates_chain_outer_to_inner() {
        let dir = tempdir().unwrap();
        let mine = dir.path().join("mine");
        let destination = mine.join("a/b/c");

        let mut prompter = ScriptedPrompter::default();
        let created = StructureBuilder::new(&mut prompter)
            .ensure_parents(&destination)
            .unwrap();

        assert_eq!(created, vec![mine.clone(), mine.join("a"), mine.join("a/b")]);
        assert!(mine.join("a/b").is_dir());
        assert!(!destination.exists());
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_existing_directories_are_left_alone() {
        let dir = tempdir().unwrap();
        let parent = dir.path().join("a");
        fs::create_dir(&parent).unwrap();
        fs::write(parent.join("keep"), "x").unwrap();

        let mut prompter = ScriptedPrompter::default();
        let created = StructureBuilder::new(&mut prompter)
            .ensure_parents(&parent.join("b/leaf"))
            .unwrap();

        assert_eq!(created, vec![parent.join("b")]);
        assert!(parent.join("keep").exists());
    }

    #[test]
    fn test_file_ancestor_prompts_then_overwrites() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("a");
        fs::write(&blocker, "not a dir").unwrap();

        let mut prompter = ScriptedPrompter::new([Decision::Overwrite]);
        let created = StructureBuilder::new(&mut prompter)
            .ensure_parents(&blocker.join("b/c"))
            .unwrap();

        assert_eq!(prompter.asked().len(), 1);
        assert!(prompter.asked()[0].message().contains("a file already exists"));
        assert_eq!(created, vec![blocker.clone(), blocker.join("b")]);
        assert!(blocker.join("b").is_dir());
    }

    #[test]
    fn test_file_ancestor_abort_stops_before_inner_dirs() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("a");
        fs::write(&blocker, "not a dir").unwrap();

        let mut prompter = ScriptedPrompter::new([Decision::Abort]);
        let err = StructureBuilder::new(&mut prompter)
            .ensure_parents(&blocker.join("b/c"))
            .unwrap_err();

        assert!(matches!(err, Error::StructureConflict { ref path } if *path == blocker));
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a dir");
    }

    #[test]
    fn test_symlinked_directory_counts_as_directory() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("real");
        fs::create_dir(&real).unwrap();
        let alias = dir.path().join("alias");
        symlink(&real, &alias).unwrap();

        let mut prompter = ScriptedPrompter::default();
        let created = StructureBuilder::new(&mut prompter)
            .ensure_parents(&alias.join("sub/leaf"))
            .unwrap();

        assert_eq!(created, vec![alias.join("sub")]);
        assert!(real.join("sub").is_dir());
    }

    #[test]
    fn test_dangling_symlink_ancestor_prompts() {
        let dir = tempdir().unwrap();
        let dangling = dir.path().join("dangling");
        symlink(dir.path().join("nowhere"), &dangling).unwrap();

        let mut prompter = ScriptedPrompter::new([Decision::Overwrite]);
        StructureBuilder::new(&mut prompter)
            .ensure_parents(&dangling.join("leaf"))
            .unwrap();

        assert!(dangling.is_dir());
        assert_eq!(prompter.asked().len(), 1);
    }
}
