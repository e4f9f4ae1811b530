//! Path handling for the mine.
//!
//! # Key Concepts
//!
//! ## Roots
//!
//! [`MineRoots`] holds the home root and the mine root. Every path that is
//! added lives under the home root; its copy lives at the same relative
//! location under the mine root.
//!
//! ## Normalization
//!
//! Normalization is purely lexical: `.` is dropped, `..` pops the previous
//! segment, repeated separators collapse. Symlinks are never followed, so a
//! path that is itself a link keeps its identity.
//!
//! ## Link resolution
//!
//! [`link::resolve_link`] reads a symlink and returns the absolute normalized
//! path it points at, interpreting relative targets against the link's
//! directory.
//!
//! # Examples
//!
//! ```
//! use dotmine::path::{MineRoots, PathResolver};
//! use std::path::Path;
//!
//! let roots = MineRoots::new("/home/user", "/home/user/dotmine").unwrap();
//! let resolver = PathResolver::new(&roots);
//!
//! let destination = resolver.resolve(Path::new("/home/user/.vimrc")).unwrap();
//! assert_eq!(destination, Path::new("/home/user/dotmine/.vimrc"));
//! ```

pub mod link;
pub mod normalize;
pub mod resolver;
mod types;

pub use resolver::PathResolver;
pub use types::MineRoots;
