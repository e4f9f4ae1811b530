//! Classification of filesystem entries.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::link::resolve_link;

/// The kind of entry found at a path, observed with `lstat` semantics.
///
/// Symlinks are never followed; a symlink carries the absolute, normalized
/// path it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsNode {
    /// Nothing exists at the path.
    Missing,
    /// A regular file. Its content is never inspected.
    RegularFile,
    /// A directory.
    Directory,
    /// A symbolic link and the path it resolves to.
    Symlink(PathBuf),
}

impl FsNode {
    /// Inspect the entry at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFileKind`] for sockets, FIFOs and device
    /// nodes, the symlink errors of [`resolve_link`] for unreadable links, and
    /// [`Error::IoFailure`] if `lstat` fails for any reason other than the
    /// path not existing.
    pub fn inspect(path: &Path) -> Result<Self> {
        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::Missing),
            Err(e) => return Err(Error::io("stat", path, e)),
        };

        let file_type = metadata.file_type();
        if file_type.is_symlink() {
            Ok(Self::Symlink(resolve_link(path)?))
        } else if file_type.is_dir() {
            Ok(Self::Directory)
        } else if file_type.is_file() {
            Ok(Self::RegularFile)
        } else {
            Err(Error::UnsupportedFileKind {
                path: path.to_path_buf(),
            })
        }
    }

    /// Whether anything exists at the path.
    #[must_use]
    pub fn exists(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// Whether the entry is a real directory (not a link to one).
    #[must_use]
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory)
    }
}

impl fmt::Display for FsNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "nothing"),
            Self::RegularFile => write!(f, "a file"),
            Self::Directory => write!(f, "a directory"),
            Self::Symlink(_) => write!(f, "a symlink"),
        }
    }
}
