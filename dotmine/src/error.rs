//! Error types for the dotmine library.
//!
//! This module provides the error hierarchy for every operation in the
//! dotmine library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a dotmine error.
///
/// # Examples
///
/// ```
/// use dotmine::{Error, Result};
/// use std::path::PathBuf;
///
/// fn example_operation() -> Result<PathBuf> {
///     Ok(PathBuf::from("/home/user/dotmine/.vimrc"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the dotmine library.
///
/// Every failure is fatal to the current invocation. There is no retry and no
/// rollback, so each variant carries enough context to say which operation
/// failed and on which path.
#[derive(Debug, Error)]
pub enum Error {
    /// The path is not inside the home directory.
    #[error("`{}` is not in the home directory `{}`", path.display(), home.display())]
    NotInHome {
        /// The rejected path.
        path: PathBuf,
        /// The home root it was checked against.
        home: PathBuf,
    },

    /// The path already lives inside the mine.
    #[error("`{}` is already in the mine `{}`", path.display(), mine.display())]
    AlreadyMined {
        /// The rejected path.
        path: PathBuf,
        /// The mine root it was checked against.
        mine: PathBuf,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// The path to add does not exist.
    #[error("given path `{}` does not exist", path.display())]
    SourceNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// A non-directory blocks the destination's parent chain and the user
    /// refused to remove it.
    #[error("file `{}` already exists where a directory is needed", path.display())]
    StructureConflict {
        /// The conflicting ancestor.
        path: PathBuf,
    },

    /// A symlink points into the mine, but not at the expected destination.
    #[error(
        "`{}` points into the mine at `{}` instead of `{}`; repairing mine links is not supported",
        link.display(),
        target.display(),
        expected.display()
    )]
    UnsupportedRelink {
        /// The symlink that was inspected.
        link: PathBuf,
        /// Where the symlink currently resolves to.
        target: PathBuf,
        /// Where it would have to point.
        expected: PathBuf,
    },

    /// A symlink has an empty target.
    #[error("symlink `{}` has an empty target", path.display())]
    BrokenLink {
        /// The broken symlink.
        path: PathBuf,
    },

    /// A symlink target could not be read.
    #[error("cannot read symlink `{}`: {source}", path.display())]
    ReadError {
        /// The symlink that could not be read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A rename crossed a filesystem boundary.
    #[error(
        "cannot move `{}` to `{}`: the mine is on a different filesystem",
        from.display(),
        to.display()
    )]
    CrossDeviceMove {
        /// The rename source.
        from: PathBuf,
        /// The rename destination.
        to: PathBuf,
    },

    /// An unexpected filesystem call failed.
    #[error("{operation} failed for `{}`: {source}", path.display())]
    IoFailure {
        /// The operation that failed (e.g. "rename", "remove").
        operation: &'static str,
        /// The path the operation was applied to.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A directory that should be empty after a merge still has entries.
    ///
    /// This is an internal invariant violation (or a concurrent external
    /// modification), not an ordinary user-facing condition.
    #[error(
        "internal error: directory `{}` is not empty after merging it into the mine",
        path.display()
    )]
    MergeInvariant {
        /// The directory that was expected to be empty.
        path: PathBuf,
    },

    /// The entry is neither a file, a directory nor a symlink.
    #[error("file kind not handled: `{}`", path.display())]
    UnsupportedFileKind {
        /// The unsupported entry.
        path: PathBuf,
    },

    /// The prompt ran out of input before a choice was made.
    #[error("no answer given to prompt: {prompt}")]
    PromptClosed {
        /// The prompt message that was left unanswered.
        prompt: String,
    },

    /// A configuration file could not be parsed.
    #[error("invalid configuration file `{}`: {source}", path.display())]
    Configuration {
        /// The configuration file.
        path: PathBuf,
        /// The parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Build an [`Error::IoFailure`] for `operation` on `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotmine::Error;
    /// use std::io;
    ///
    /// let err = Error::io("rename", "/tmp/x", io::Error::from(io::ErrorKind::PermissionDenied));
    /// assert!(err.to_string().starts_with("rename failed"));
    /// ```
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoFailure {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Check if the error rejected a path before anything was touched.
    #[must_use]
    pub fn is_rejected_path(&self) -> bool {
        matches!(
            self,
            Self::NotInHome { .. }
                | Self::AlreadyMined { .. }
                | Self::InvalidPath { .. }
                | Self::SourceNotFound { .. }
        )
    }

    /// Check if the error came from the filesystem layer.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::IoFailure { .. }
                | Self::CrossDeviceMove { .. }
                | Self::BrokenLink { .. }
                | Self::ReadError { .. }
        )
    }
}
