//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `add`: Move a file or directory into the mine
//! - `show`: List the mine's entries and their link state
//! - `show_mine`: Show the resolved mine location
//! - `completions`: Generate shell completion scripts

pub mod add;
pub mod completions;
pub mod show;
pub mod show_mine;

pub use add::AddCommand;
pub use completions::CompletionsCommand;
pub use show::ShowCommand;
pub use show_mine::ShowMineCommand;
