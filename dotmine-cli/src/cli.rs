//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{AddCommand, CompletionsCommand, ShowCommand, ShowMineCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Keep your dotfiles in one directory and symlink them back into place.
#[derive(Parser)]
#[command(name = "dotmine")]
#[command(version, about = "Move dotfiles into a mine and link them back", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Location of the mine (relative paths are taken from the home directory)
    #[arg(long, value_name = "PATH", global = true, env = "DOTMINE_DIR")]
    pub mine: Option<PathBuf>,

    /// Read configuration from this file instead of ~/.config/dotmine/config.yaml
    #[arg(long, value_name = "PATH", global = true, env = "DOTMINE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Move a file or directory into the mine and leave a symlink behind
    Add(AddCommand),

    /// List the mine's entries and whether they are linked
    Show(ShowCommand),

    /// Print the location of the mine
    ShowMine(ShowMineCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
