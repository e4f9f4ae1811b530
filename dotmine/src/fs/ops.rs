//! Filesystem primitives used by the reconciler.
//!
//! Thin wrappers over `std::fs` that map every failure to an [`Error`]
//! naming the operation and the path involved. None of them follow
//! symlinks: removing a link removes the link, never its referent.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Atomically rename `from` to `to`.
///
/// # Errors
///
/// Returns [`Error::CrossDeviceMove`] if the two paths are on different
/// filesystems, [`Error::IoFailure`] for any other failure.
pub fn rename(from: &Path, to: &Path) -> Result<()> {
    log::debug!("moving `{}` to `{}`", from.display(), to.display());
    fs::rename(from, to).map_err(|e| {
        if e.raw_os_error() == Some(libc::EXDEV) {
            Error::CrossDeviceMove {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
            }
        } else {
            Error::io("rename", from, e)
        }
    })
}

/// Remove a file, a symlink, or a directory together with its contents.
///
/// Symlinks inside a removed directory are unlinked, not followed.
///
/// # Errors
///
/// Returns [`Error::IoFailure`] if `path` does not exist or any removal fails.
pub fn remove_recursive(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| Error::io("stat", path, e))?;

    if metadata.file_type().is_dir() {
        log::debug!("removing contents of directory `{}`", path.display());
        for entry in read_dir_names(path)? {
            remove_recursive(&path.join(entry))?;
        }
        log::debug!("removing `{}`", path.display());
        fs::remove_dir(path).map_err(|e| Error::io("remove", path, e))
    } else {
        log::debug!("removing `{}`", path.display());
        fs::remove_file(path).map_err(|e| Error::io("remove", path, e))
    }
}

/// Remove a single file or symlink.
///
/// # Errors
///
/// Returns [`Error::IoFailure`] if the removal fails, including when `path`
/// is a directory.
pub fn remove_entry(path: &Path) -> Result<()> {
    log::debug!("removing `{}`", path.display());
    fs::remove_file(path).map_err(|e| Error::io("remove", path, e))
}

/// Remove a directory that is expected to be empty.
///
/// # Errors
///
/// Returns [`Error::MergeInvariant`] if the directory still has entries and
/// [`Error::IoFailure`] for any other failure.
pub fn remove_empty_dir(path: &Path) -> Result<()> {
    log::debug!("removing merged directory `{}`", path.display());
    fs::remove_dir(path).map_err(|e| {
        if e.raw_os_error() == Some(libc::ENOTEMPTY) || e.raw_os_error() == Some(libc::EEXIST) {
            Error::MergeInvariant {
                path: path.to_path_buf(),
            }
        } else {
            Error::io("rmdir", path, e)
        }
    })
}

/// Create a single directory. The parent must already exist.
///
/// # Errors
///
/// Returns [`Error::IoFailure`] if the directory cannot be created.
pub fn create_dir(path: &Path) -> Result<()> {
    log::debug!("creating directory `{}`", path.display());
    fs::create_dir(path).map_err(|e| Error::io("mkdir", path, e))
}

/// Create a symlink at `link` pointing to `target`.
///
/// Trailing separators on `link` are ignored, so `~/.config/` links the
/// directory entry itself.
///
/// # Errors
///
/// Returns [`Error::IoFailure`] if the link cannot be created, e.g. because
/// something already exists at `link`.
pub fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    let link = strip_trailing_separators(link);
    log::debug!("creating symlink `{}` -> `{}`", link.display(), target.display());
    symlink(target, &link).map_err(|e| Error::io("symlink", link, e))
}

/// List the entry names of a directory, excluding `.` and `..`.
///
/// # Errors
///
/// Returns [`Error::IoFailure`] if the directory cannot be read.
pub fn read_dir_names(path: &Path) -> Result<Vec<std::ffi::OsString>> {
    fs::read_dir(path)
        .map_err(|e| Error::io("opendir", path, e))?
        .map(|entry| {
            entry
                .map(|entry| entry.file_name())
                .map_err(|e| Error::io("readdir", path, e))
        })
        .collect()
}

fn strip_trailing_separators(path: &Path) -> PathBuf {
    // Rebuilding from components drops trailing separators and `.` segments.
    path.components().collect()
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}
