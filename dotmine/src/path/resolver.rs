//! Mapping between home-side paths and their mirrored location in the mine.
//!
//! This module provides the `PathResolver` type, which turns an absolute
//! path under the home directory into the path it will occupy inside the
//! mine, and back.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::types::MineRoots;

/// Resolves home-side paths to their mirrored mine paths.
///
/// The mapping is a pure prefix substitution: the home root is replaced by
/// the mine root and the rest of the path is kept as is. No filesystem call
/// is made.
///
/// # Examples
///
/// ```
/// use dotmine::path::{MineRoots, PathResolver};
/// use std::path::{Path, PathBuf};
///
/// let roots = MineRoots::new("/home/user", "/home/user/dotmine").unwrap();
/// let resolver = PathResolver::new(&roots);
///
/// let destination = resolver.resolve(Path::new("/home/user/.config/nvim")).unwrap();
/// assert_eq!(destination, PathBuf::from("/home/user/dotmine/.config/nvim"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    roots: &'a MineRoots,
}

impl<'a> PathResolver<'a> {
    /// Create a resolver for the given roots.
    #[must_use]
    pub fn new(roots: &'a MineRoots) -> Self {
        Self { roots }
    }

    /// The roots this resolver maps between.
    #[must_use]
    pub fn roots(&self) -> &'a MineRoots {
        self.roots
    }

    /// Map an absolute home-side path to its destination in the mine.
    ///
    /// The mine check runs first, so a mine that lives outside the home
    /// directory still reports [`Error::AlreadyMined`] for its own entries.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`Error::InvalidPath`] if `path` is relative, is the home root, or
    ///   contains the mine
    /// - [`Error::AlreadyMined`] if `path` is inside the mine
    /// - [`Error::NotInHome`] if `path` is outside the home directory
    ///
    /// # Examples
    ///
    /// ```
    /// use dotmine::path::{MineRoots, PathResolver};
    /// use dotmine::Error;
    /// use std::path::Path;
    ///
    /// let roots = MineRoots::new("/home/user", "/home/user/dotmine").unwrap();
    /// let resolver = PathResolver::new(&roots);
    ///
    /// assert!(matches!(
    ///     resolver.resolve(Path::new("/etc/foo")),
    ///     Err(Error::NotInHome { .. })
    /// ));
    /// assert!(matches!(
    ///     resolver.resolve(Path::new("/home/user/dotmine/foo")),
    ///     Err(Error::AlreadyMined { .. })
    /// ));
    /// ```
    pub fn resolve(&self, path: &Path) -> Result<PathBuf> {
        if !path.is_absolute() {
            return Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "path must be absolute".to_string(),
            });
        }

        if self.roots.is_mined(path) {
            return Err(Error::AlreadyMined {
                path: path.to_path_buf(),
                mine: self.roots.mine().to_path_buf(),
            });
        }

        let Ok(relative) = path.strip_prefix(self.roots.home()) else {
            return Err(Error::NotInHome {
                path: path.to_path_buf(),
                home: self.roots.home().to_path_buf(),
            });
        };

        if relative.as_os_str().is_empty() || self.roots.mine().starts_with(path) {
            return Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: format!(
                    "it contains the mine `{}` and cannot be moved into it",
                    self.roots.mine().display()
                ),
            });
        }

        Ok(self.roots.mine().join(relative))
    }

    /// Map a path inside the mine back to the home-side path it mirrors.
    ///
    /// Returns `None` if `mined` is not inside the mine.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotmine::path::{MineRoots, PathResolver};
    /// use std::path::{Path, PathBuf};
    ///
    /// let roots = MineRoots::new("/home/user", "/home/user/dotmine").unwrap();
    /// let resolver = PathResolver::new(&roots);
    ///
    /// assert_eq!(
    ///     resolver.home_path_for(Path::new("/home/user/dotmine/.vimrc")),
    ///     Some(PathBuf::from("/home/user/.vimrc"))
    /// );
    /// assert_eq!(resolver.home_path_for(Path::new("/etc/hosts")), None);
    /// ```
    #[must_use]
    pub fn home_path_for(&self, mined: &Path) -> Option<PathBuf> {
        mined
            .strip_prefix(self.roots.mine())
            .ok()
            .map(|relative| self.roots.home().join(relative))
    }
}
