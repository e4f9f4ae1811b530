//! Symlink inspection.
//!
//! Resolves where a symbolic link points, as an absolute and lexically
//! normalized path. The link is read once with `readlink`; the target is not
//! required to exist.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::normalize::normalize_against;

/// Resolve the absolute, normalized target of the symlink at `link`.
///
/// A relative target is interpreted against the directory containing the
/// link, never against the process's working directory.
///
/// # Errors
///
/// Returns [`Error::ReadError`] if the link cannot be read (including when
/// `link` is not a symlink) and [`Error::BrokenLink`] if its target is empty.
///
/// # Examples
///
/// ```no_run
/// use dotmine::path::link::resolve_link;
/// use std::path::Path;
///
/// // /home/user/dir/link -> ../other
/// let target = resolve_link(Path::new("/home/user/dir/link")).unwrap();
/// assert_eq!(target, Path::new("/home/user/other"));
/// ```
pub fn resolve_link(link: &Path) -> Result<PathBuf> {
    let raw = fs::read_link(link).map_err(|source| Error::ReadError {
        path: link.to_path_buf(),
        source,
    })?;

    if raw.as_os_str().is_empty() {
        return Err(Error::BrokenLink {
            path: link.to_path_buf(),
        });
    }

    let base = link.parent().unwrap_or_else(|| Path::new("/"));
    Ok(normalize_against(base, &raw))
}
