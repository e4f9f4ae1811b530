//! The tree reconciler.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::fs::{ops, FsNode, StructureBuilder};
use crate::path::{MineRoots, PathResolver};
use crate::prompt::{Decision, Prompt, Prompter};

use super::Outcome;

/// Moves entries from the home directory into the mine.
///
/// Every destructive step is confirmed through the [`Prompter`], except
/// removing a symlink that already points at its own destination.
pub struct Reconciler<'a, P> {
    roots: &'a MineRoots,
    prompter: P,
}

impl<'a, P: Prompter> Reconciler<'a, P> {
    /// Create a reconciler for `roots` asking `prompter` for decisions.
    pub fn new(roots: &'a MineRoots, prompter: P) -> Self {
        Self { roots, prompter }
    }

    /// The roots this reconciler works between.
    #[must_use]
    pub fn roots(&self) -> &'a MineRoots {
        self.roots
    }

    /// Give back the prompter, e.g. to inspect a scripted session.
    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Add an absolute, normalized home path to the mine.
    ///
    /// This resolves the destination, creates its parent directories and
    /// then runs [`Reconciler::add_path`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceNotFound`] if nothing exists at `source`,
    /// [`Error::AlreadyMined`] if `source` really lives inside the mine
    /// through a linked ancestor, any rejection of [`PathResolver::resolve`],
    /// and every error of
    /// [`StructureBuilder::ensure_parents`] and [`Reconciler::add_path`].
    pub fn add(&mut self, source: &Path) -> Result<Outcome> {
        match fs::symlink_metadata(source) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::SourceNotFound {
                    path: source.to_path_buf(),
                })
            }
            Err(e) => return Err(Error::io("stat", source, e)),
        }

        self.check_real_location(source)?;
        let destination = PathResolver::new(self.roots).resolve(source)?;
        log::debug!(
            "adding `{}` as `{}`",
            source.display(),
            destination.display()
        );

        let created = StructureBuilder::new(&mut self.prompter).ensure_parents(&destination)?;
        for dir in &created {
            log::debug!("created directory `{}`", dir.display());
        }

        self.add_path(source, &destination)
    }

    /// Move `source` to `destination` and leave a symlink at `source`.
    ///
    /// The caller guarantees that `source` exists and that the parent of
    /// `destination` is a directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedRelink`] if `source` is a symlink into the
    /// mine that does not point at `destination`, [`Error::PromptClosed`] if
    /// a decision cannot be obtained, and any filesystem error along the way.
    pub fn add_path(&mut self, source: &Path, destination: &Path) -> Result<Outcome> {
        match FsNode::inspect(source)? {
            FsNode::Missing => Err(Error::SourceNotFound {
                path: source.to_path_buf(),
            }),
            FsNode::Symlink(target) => {
                if target == destination {
                    log::debug!("`{}` is already linked", source.display());
                    return Ok(Outcome::AlreadyLinked);
                }
                self.check_foreign_link(source, &target, destination)?;
                self.handle_regular_file(source, destination, true)
            }
            FsNode::RegularFile => self.handle_regular_file(source, destination, true),
            FsNode::Directory => self.handle_directory(source, destination),
        }
    }

    /// Move a file or symlink to `destination`.
    ///
    /// If something already exists there, the user picks between overwriting
    /// it and deleting the source. With `create_link`, a symlink to
    /// `destination` is left at `source` in either case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PromptClosed`] if no decision can be obtained, and
    /// any filesystem error along the way.
    pub fn handle_regular_file(
        &mut self,
        source: &Path,
        destination: &Path,
        create_link: bool,
    ) -> Result<Outcome> {
        let outcome = match FsNode::inspect(destination)? {
            FsNode::Missing => {
                ops::rename(source, destination)?;
                Outcome::Relocated
            }
            existing => {
                let prompt = Prompt::new(
                    format!(
                        "{existing} already exists at `{}`; overwrite it with `{}`, or delete the source?",
                        destination.display(),
                        source.display()
                    ),
                    &[Decision::Overwrite, Decision::DeleteSource],
                );
                match self.prompter.choose(&prompt)? {
                    Decision::Overwrite => self.overwrite(source, destination)?,
                    Decision::DeleteSource => {
                        ops::remove_recursive(source)?;
                        Outcome::Discarded
                    }
                    _ => Outcome::Declined,
                }
            }
        };

        if create_link && outcome.is_linked() {
            ops::create_symlink(destination, source)?;
        }
        log::debug!("`{}`: {outcome}", source.display());
        Ok(outcome)
    }

    /// Move a directory to `destination` and leave a symlink at `source`.
    ///
    /// An existing directory at `destination` can be overwritten or merged
    /// into; an existing non-directory can only be overwritten. Skipping
    /// leaves everything untouched and creates no link.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PromptClosed`] if no decision can be obtained, every
    /// error of [`Reconciler::merge_directory`], and any filesystem error
    /// along the way.
    pub fn handle_directory(&mut self, source: &Path, destination: &Path) -> Result<Outcome> {
        let outcome = match FsNode::inspect(destination)? {
            FsNode::Missing => {
                ops::rename(source, destination)?;
                Outcome::Relocated
            }
            FsNode::Directory => {
                let prompt = Prompt::new(
                    format!(
                        "a directory already exists at `{}`; overwrite it, merge `{}` into it, or skip?",
                        destination.display(),
                        source.display()
                    ),
                    &[Decision::Overwrite, Decision::Merge, Decision::Skip],
                )
                .with_default(Decision::Skip);
                match self.prompter.choose(&prompt)? {
                    Decision::Overwrite => self.overwrite(source, destination)?,
                    Decision::Merge => {
                        self.merge_directory(source, destination)?;
                        Outcome::Merged
                    }
                    _ => Outcome::Declined,
                }
            }
            existing => {
                let prompt = Prompt::new(
                    format!(
                        "{existing} already exists at `{}`; overwrite it with the directory `{}`?",
                        destination.display(),
                        source.display()
                    ),
                    &[Decision::Overwrite, Decision::Skip],
                )
                .with_default(Decision::Skip);
                match self.prompter.choose(&prompt)? {
                    Decision::Overwrite => self.overwrite(source, destination)?,
                    _ => Outcome::Declined,
                }
            }
        };

        if outcome.is_linked() {
            ops::create_symlink(destination, source)?;
        }
        log::debug!("`{}`: {outcome}", source.display());
        Ok(outcome)
    }

    /// Merge `source` into `destination`, removing `source` entirely.
    ///
    /// Children are merged recursively. Symlinks that already point at their
    /// destination are removed without asking. No symlinks are created.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MergeInvariant`] if a merged directory is not empty
    /// afterwards, [`Error::UnsupportedRelink`] for a symlink pointing
    /// elsewhere into the mine, [`Error::PromptClosed`] if no decision can be
    /// obtained, and any filesystem error along the way.
    pub fn merge_directory(&mut self, source: &Path, destination: &Path) -> Result<Outcome> {
        match FsNode::inspect(source)? {
            FsNode::Missing => Err(Error::SourceNotFound {
                path: source.to_path_buf(),
            }),
            FsNode::Directory => self.merge_subdirectory(source, destination),
            FsNode::Symlink(target) => {
                if target == destination {
                    log::debug!("removing redundant link `{}`", source.display());
                    ops::remove_entry(source)?;
                    return Ok(Outcome::Discarded);
                }
                self.check_foreign_link(source, &target, destination)?;
                self.handle_regular_file(source, destination, false)
            }
            FsNode::RegularFile => self.handle_regular_file(source, destination, false),
        }
    }

    /// Reject a source that only looks like a home path because one of its
    /// ancestors is a symlink into the mine, e.g. `~/.config/nvim` once
    /// `~/.config` itself has been added. Source and destination would be the
    /// same file.
    fn check_real_location(&self, source: &Path) -> Result<()> {
        let (Some(parent), Some(name)) = (source.parent(), source.file_name()) else {
            return Ok(());
        };
        // Nothing can be inside a mine that does not exist yet.
        let Ok(real_mine) = fs::canonicalize(self.roots.mine()) else {
            return Ok(());
        };
        let real_parent =
            fs::canonicalize(parent).map_err(|e| Error::io("canonicalize", parent, e))?;

        if real_parent.join(name).starts_with(&real_mine) {
            log::debug!(
                "`{}` resolves to `{}` inside the mine",
                source.display(),
                real_parent.join(name).display()
            );
            return Err(Error::AlreadyMined {
                path: source.to_path_buf(),
                mine: self.roots.mine().to_path_buf(),
            });
        }
        Ok(())
    }

    fn merge_subdirectory(&mut self, source: &Path, destination: &Path) -> Result<Outcome> {
        match FsNode::inspect(destination)? {
            FsNode::Missing => {
                ops::rename(source, destination)?;
                Ok(Outcome::Relocated)
            }
            FsNode::Directory => {
                for name in ops::read_dir_names(source)? {
                    self.merge_directory(&source.join(&name), &destination.join(&name))?;
                }
                ops::remove_empty_dir(source)?;
                Ok(Outcome::Merged)
            }
            existing => {
                let prompt = Prompt::new(
                    format!(
                        "{existing} already exists at `{}`; overwrite it with the directory `{}`, or delete the source?",
                        destination.display(),
                        source.display()
                    ),
                    &[Decision::Overwrite, Decision::DeleteSource],
                );
                match self.prompter.choose(&prompt)? {
                    Decision::Overwrite => self.overwrite(source, destination),
                    Decision::DeleteSource => {
                        ops::remove_recursive(source)?;
                        Ok(Outcome::Discarded)
                    }
                    _ => Err(Error::MergeInvariant {
                        path: source.to_path_buf(),
                    }),
                }
            }
        }
    }

    fn overwrite(&self, source: &Path, destination: &Path) -> Result<Outcome> {
        ops::remove_recursive(destination)?;
        ops::rename(source, destination)?;
        Ok(Outcome::Overwrote)
    }

    fn check_foreign_link(&self, link: &Path, target: &Path, expected: &Path) -> Result<()> {
        if self.roots.is_mined(target) {
            return Err(Error::UnsupportedRelink {
                link: link.to_path_buf(),
                target: target.to_path_buf(),
                expected: expected.to_path_buf(),
            });
        }
        Ok(())
    }
}
