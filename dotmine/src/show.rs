//! Listing what the mine contains and whether the home side links to it.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::{ops, FsNode};
use crate::path::{MineRoots, PathResolver};

/// Directory names inside the mine that are never reported.
const SKIPPED_NAMES: &[&str] = &[".git"];

/// Whether a mine entry is wired up on the home side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// The mirrored home path is a symlink resolving to the entry.
    Linked,
    /// The home side is missing or points somewhere else.
    Unlinked,
}

/// One reported entry of the mine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MineEntry {
    /// The entry's path inside the mine.
    pub mine_path: PathBuf,
    /// The home path the entry mirrors.
    pub home_path: PathBuf,
    /// Whether `home_path` links to `mine_path`.
    pub state: LinkState,
}

impl fmt::Display for MineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            LinkState::Linked => write!(
                f,
                "{} -> {}",
                self.home_path.display(),
                self.mine_path.display()
            ),
            LinkState::Unlinked => write!(f, "{} (unlinked)", self.mine_path.display()),
        }
    }
}

/// Walk the mine depth-first and report every linked or unlinked entry.
///
/// Entries are visited sorted by name. A directory whose home counterpart
/// links to it is reported as a whole; other directories are descended into.
/// A mine that does not exist yet is empty.
///
/// # Errors
///
/// Returns an error if the mine is not a directory or one of its entries
/// cannot be read.
///
/// # Examples
///
/// ```no_run
/// use dotmine::path::MineRoots;
/// use dotmine::show::inspect_mine;
///
/// let roots = MineRoots::new("/home/user", "/home/user/dotmine").unwrap();
/// for entry in inspect_mine(&roots).unwrap() {
///     println!("{entry}");
/// }
/// ```
pub fn inspect_mine(roots: &MineRoots) -> Result<Vec<MineEntry>> {
    match fs::metadata(roots.mine()) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => {
            return Err(Error::InvalidPath {
                path: roots.mine().to_path_buf(),
                reason: "the mine is not a directory".to_string(),
            })
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::io("stat", roots.mine(), e)),
    }

    let resolver = PathResolver::new(roots);
    let mut entries = Vec::new();
    walk(&resolver, roots.mine(), &mut entries)?;
    Ok(entries)
}

fn walk(resolver: &PathResolver<'_>, dir: &Path, entries: &mut Vec<MineEntry>) -> Result<()> {
    let mut names = ops::read_dir_names(dir)?;
    names.sort();

    for name in names {
        if SKIPPED_NAMES.iter().any(|skipped| name == *skipped) {
            continue;
        }
        let mine_path = dir.join(&name);
        let Some(home_path) = resolver.home_path_for(&mine_path) else {
            continue;
        };

        // An uninspectable home side (e.g. a parent that is a file) is unlinked.
        let linked = matches!(
            FsNode::inspect(&home_path),
            Ok(FsNode::Symlink(target)) if target == mine_path
        );

        if linked {
            entries.push(MineEntry {
                mine_path,
                home_path,
                state: LinkState::Linked,
            });
        } else if FsNode::inspect(&mine_path)?.is_dir() {
            walk(resolver, &mine_path, entries)?;
        } else {
            entries.push(MineEntry {
                mine_path,
                home_path,
                state: LinkState::Unlinked,
            });
        }
    }
    Ok(())
}
