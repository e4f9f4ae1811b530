//! Core types for path handling.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::normalize::resolve_components;

/// The home root and the mine root, established once at startup.
///
/// Both roots are absolute and lexically normalized. Every component that
/// needs them receives them explicitly; there is no process-wide state.
///
/// # Examples
///
/// ```
/// use dotmine::path::MineRoots;
/// use std::path::Path;
///
/// let roots = MineRoots::new("/home/user", "/home/user/dotmine/").unwrap();
/// assert_eq!(roots.home(), Path::new("/home/user"));
/// assert_eq!(roots.mine(), Path::new("/home/user/dotmine"));
/// assert!(roots.is_mined(Path::new("/home/user/dotmine/.vimrc")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MineRoots {
    home: PathBuf,
    mine: PathBuf,
}

impl MineRoots {
    /// Create a new pair of roots.
    ///
    /// # Errors
    ///
    /// Returns an error if either root is not absolute, or if the mine is
    /// the home directory or one of its ancestors.
    pub fn new(home: impl Into<PathBuf>, mine: impl Into<PathBuf>) -> Result<Self> {
        let home = Self::absolute_root(home.into())?;
        let mine = Self::absolute_root(mine.into())?;
        if home.starts_with(&mine) {
            return Err(Error::InvalidPath {
                path: mine,
                reason: format!(
                    "the mine must not contain the home directory `{}`",
                    home.display()
                ),
            });
        }
        Ok(Self { home, mine })
    }

    fn absolute_root(path: PathBuf) -> Result<PathBuf> {
        if !path.is_absolute() {
            return Err(Error::InvalidPath {
                path,
                reason: "root directories must be absolute".to_string(),
            });
        }
        Ok(resolve_components(&path))
    }

    /// The home root.
    #[must_use]
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// The mine root.
    #[must_use]
    pub fn mine(&self) -> &Path {
        &self.mine
    }

    /// Whether `path` is the mine root or lies inside it.
    ///
    /// The comparison is component-wise, so `/home/user/dotmine2` is not
    /// inside `/home/user/dotmine`.
    #[must_use]
    pub fn is_mined(&self, path: &Path) -> bool {
        path.starts_with(&self.mine)
    }

    /// Whether `path` is the home root or lies inside it.
    #[must_use]
    pub fn is_in_home(&self, path: &Path) -> bool {
        path.starts_with(&self.home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roots_are_normalized() {
        let roots = MineRoots::new("/home/./user/", "/home/user/x/../dotmine").unwrap();
        assert_eq!(roots.home(), Path::new("/home/user"));
        assert_eq!(roots.mine(), Path::new("/home/user/dotmine"));
    }

    #[test]
    fn test_relative_root_rejected() {
        assert!(MineRoots::new("home/user", "/home/user/dotmine").is_err());
        assert!(MineRoots::new("/home/user", "dotmine").is_err());
    }

    #[test]
    fn test_mine_containing_home_rejected() {
        for mine in ["/home/user", "/home/user/", "/home", "/", "/home/user/x/.."] {
            assert!(
                matches!(
                    MineRoots::new("/home/user", mine),
                    Err(Error::InvalidPath { .. })
                ),
                "{mine}"
            );
        }
        assert!(MineRoots::new("/home/user", "/home/username").is_ok());
        assert!(MineRoots::new("/home/user", "/srv/dotmine").is_ok());
    }

    #[test]
    fn test_is_mined_is_component_wise() {
        let roots = MineRoots::new("/home/user", "/home/user/dotmine").unwrap();
        assert!(roots.is_mined(Path::new("/home/user/dotmine")));
        assert!(roots.is_mined(Path::new("/home/user/dotmine/a/b")));
        assert!(!roots.is_mined(Path::new("/home/user/dotmine2/a")));
    }

    #[test]
    fn test_is_in_home() {
        let roots = MineRoots::new("/home/user", "/home/user/dotmine").unwrap();
        assert!(roots.is_in_home(Path::new("/home/user/.bashrc")));
        assert!(!roots.is_in_home(Path::new("/home/username/.bashrc")));
        assert!(!roots.is_in_home(Path::new("/etc/foo")));
    }
}
