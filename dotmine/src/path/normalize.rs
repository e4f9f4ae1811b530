//! Path normalization functions.
//!
//! This module provides functionality to normalize paths by:
//! - Expanding tilde (~) to the home directory
//! - Converting relative paths to absolute paths
//! - Resolving `.` and `..` components lexically
//!
//! Nothing here touches the filesystem apart from locating the current
//! directory; symlinks in the normalized path are never followed.

use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use dotmine::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/.vimrc")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with(".vimrc"));
///
/// // Leaves absolute paths unchanged
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(path_str) = path.to_str() else {
        // Non UTF-8 paths cannot start with a literal `~` we care about.
        return Ok(path.to_path_buf());
    };

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if let Some(rest) = path_str.strip_prefix("~/") {
        Ok(home.join(rest))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components of an absolute path lexically.
///
/// `.` segments are dropped, `..` pops the previously retained segment when
/// there is one (a `..` at the root is dropped), and repeated separators
/// collapse. The path does not need to exist.
///
/// # Examples
///
/// ```
/// use dotmine::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c"));
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// let resolved = resolve_components(Path::new("/a/../../c"));
/// assert_eq!(resolved, PathBuf::from("/c"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => result.push(c),
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping past the root is a no-op.
                result.pop();
            }
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    result
}

/// Join `path` onto `base` (unless it is already absolute) and resolve the
/// result lexically.
///
/// # Examples
///
/// ```
/// use dotmine::path::normalize::normalize_against;
/// use std::path::{Path, PathBuf};
///
/// let joined = normalize_against(Path::new("/home/user/dir"), Path::new("../other"));
/// assert_eq!(joined, PathBuf::from("/home/user/other"));
///
/// let absolute = normalize_against(Path::new("/home/user/dir"), Path::new("/etc//hosts"));
/// assert_eq!(absolute, PathBuf::from("/etc/hosts"));
/// ```
#[must_use]
pub fn normalize_against(base: &Path, path: &Path) -> PathBuf {
    resolve_components(&base.join(path))
}

/// Normalize a path to absolute form.
///
/// This is the main normalization function that:
/// 1. Expands tilde (~) if present
/// 2. Converts relative paths to absolute (using current directory)
/// 3. Resolves `.` and `..` components
///
/// The current directory is taken from `$PWD` when it names the same
/// directory as the process's working directory, so a home reached through a
/// symlinked path keeps its spelling.
///
/// # Errors
///
/// Returns an error if tilde expansion fails or the current directory cannot
/// be determined.
///
/// # Examples
///
/// ```no_run
/// use dotmine::path::normalize::normalize;
/// use std::path::Path;
///
/// let normalized = normalize(Path::new("~/.config/../.vimrc")).unwrap();
/// assert!(normalized.ends_with(".vimrc"));
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        return Ok(resolve_components(&expanded));
    }

    let physical = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Cannot get current directory: {e}"),
    })?;
    let cwd = logical_dir(physical, env::var_os("PWD").map(PathBuf::from));
    Ok(normalize_against(&cwd, &expanded))
}

/// Prefer `pwd` over the physical working directory when both resolve to
/// the same directory.
fn logical_dir(physical: PathBuf, pwd: Option<PathBuf>) -> PathBuf {
    match pwd {
        Some(pwd) if pwd.is_absolute() && same_directory(&pwd, &physical) => pwd,
        _ => physical,
    }
}

fn same_directory(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
