//! Filesystem inspection and mutation.
//!
//! - [`node`]: classify an entry (`lstat` semantics)
//! - [`ops`]: rename, remove, create and link primitives
//! - [`structure`]: create a destination's parent chain

pub mod node;
pub mod ops;
pub mod structure;

pub use node::FsNode;
pub use structure::StructureBuilder;
