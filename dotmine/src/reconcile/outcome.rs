//! Terminal results of a reconciliation.

use std::fmt;

/// What happened to a source path once reconciliation finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The source was moved; nothing existed at the destination.
    Relocated,
    /// The destination was removed and the source moved in its place.
    Overwrote,
    /// The source directory was merged into the destination directory.
    Merged,
    /// The source was removed and the destination kept.
    ///
    /// This includes symlinks that already pointed at their destination.
    Discarded,
    /// The source already was a symlink to its destination.
    AlreadyLinked,
    /// The user chose to leave both sides untouched.
    Declined,
}

impl Outcome {
    /// Whether the source ends up as a symlink into the mine.
    #[must_use]
    pub fn is_linked(self) -> bool {
        !matches!(self, Self::Declined)
    }

    /// Whether the filesystem was modified.
    #[must_use]
    pub fn changed(self) -> bool {
        !matches!(self, Self::Declined | Self::AlreadyLinked)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relocated => write!(f, "moved"),
            Self::Overwrote => write!(f, "overwrote existing destination"),
            Self::Merged => write!(f, "merged"),
            Self::Discarded => write!(f, "kept existing destination"),
            Self::AlreadyLinked => write!(f, "already linked"),
            Self::Declined => write!(f, "skipped"),
        }
    }
}
