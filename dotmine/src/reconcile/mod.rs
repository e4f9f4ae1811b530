//! Moving home entries into the mine.
//!
//! The [`Reconciler`] takes a source under the home directory and the
//! destination it mirrors in the mine, moves the source over and leaves a
//! symlink behind. When something already exists at the destination the
//! user is asked how to resolve it; directories can be merged recursively.
//!
//! # Examples
//!
//! ```no_run
//! use dotmine::path::MineRoots;
//! use dotmine::prompt::TerminalPrompter;
//! use dotmine::reconcile::{Outcome, Reconciler};
//! use std::path::Path;
//!
//! let roots = MineRoots::new("/home/user", "/home/user/dotmine").unwrap();
//! let mut reconciler = Reconciler::new(&roots, TerminalPrompter::stdio());
//!
//! let outcome = reconciler.add(Path::new("/home/user/.vimrc")).unwrap();
//! assert!(outcome.is_linked());
//! ```

mod outcome;
mod reconciler;

pub use outcome::Outcome;
pub use reconciler::Reconciler;
