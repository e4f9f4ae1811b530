//! Environment variable handling for configuration overrides.
//!
//! This module provides support for DOTMINE_* environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable selecting the mine directory.
pub const MINE_ENV: &str = "DOTMINE_DIR";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use dotmine::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an empty value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        // DOTMINE_DIR
        if let Some(mine) = env::var_os(MINE_ENV) {
            if mine.is_empty() {
                return Err(Error::Validation {
                    field: MINE_ENV.into(),
                    message: "Cannot be empty".into(),
                });
            }
            config.mine = Some(PathBuf::from(mine));
        }

        Ok(())
    }
}
