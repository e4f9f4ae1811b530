//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including path normalization, configuration loading and output formatting.

use crate::error::CliError;
use dotmine::path::normalize::normalize;
use dotmine::{Config, ConfigBuilder, MineRoots};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the mine location.
    pub mine: Option<PathBuf>,

    /// Override the configuration file.
    pub config: Option<PathBuf>,
}

/// Normalize a path (make absolute, expand ~, resolve `.` and `..`) without
/// following symlinks.
///
/// The path itself may be a symlink; it must keep its identity.
pub fn normalize_path(path: &Path) -> Result<PathBuf, CliError> {
    normalize(path).map_err(CliError::from)
}

/// Resolve the home and mine roots.
///
/// The mine location is merged from multiple sources with precedence:
/// 1. `--mine` (or `DOTMINE_DIR`, which clap maps onto it)
/// 2. Environment variables
/// 3. The configuration file (`--config` or the default location)
/// 4. Built-in default (`~/dotmine`)
pub fn resolve_roots(global: &GlobalOptions) -> Result<MineRoots, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        builder = builder.with_config_file(normalize_path(path)?);
    }

    if let Some(ref mine) = global.mine {
        builder = builder.with_config(Config {
            mine: Some(mine.clone()),
        });
    }

    builder.build_roots().map_err(CliError::from)
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path, home: &Path) -> String {
    match path.strip_prefix(home) {
        Ok(relative) if relative.as_os_str().is_empty() => "~".to_string(),
        Ok(relative) => format!("~/{}", relative.display()),
        Err(_) => path.display().to_string(),
    }
}
