#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # dotmine
//!
//! A library for collecting dotfiles into a single directory, the *mine*.
//!
//! Adding a path moves it from the home directory to the same relative
//! location inside the mine and leaves a symlink behind, so every program
//! keeps finding its configuration where it expects it. Conflicts with
//! entries already in the mine are resolved interactively; directories can
//! be merged recursively.
//!
//! ## Core Types
//!
//! - [`MineRoots`] and [`PathResolver`]: Mapping home paths to mine paths
//! - [`Reconciler`] and [`Outcome`]: Moving entries into the mine
//! - [`Prompter`] and [`Decision`]: Asking the user how to resolve conflicts
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use dotmine::{MineRoots, PathResolver};
//! use std::path::{Path, PathBuf};
//!
//! let roots = MineRoots::new("/home/user", "/home/user/dotmine").unwrap();
//! let destination = PathResolver::new(&roots)
//!     .resolve(Path::new("/home/user/.config/git/config"))
//!     .unwrap();
//! assert_eq!(destination, PathBuf::from("/home/user/dotmine/.config/git/config"));
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod path;
pub mod prompt;
pub mod reconcile;
pub mod show;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use fs::{FsNode, StructureBuilder};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{MineRoots, PathResolver};
pub use prompt::{Decision, Prompt, Prompter, ScriptedPrompter, TerminalPrompter};
pub use reconcile::{Outcome, Reconciler};
pub use show::{inspect_mine, LinkState, MineEntry};
