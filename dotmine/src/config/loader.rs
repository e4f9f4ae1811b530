//! Configuration file discovery and loading.
//!
//! This module handles finding and loading the dotmine configuration file.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A loaded configuration file.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use dotmine::config::ConfigLoader;
/// use std::path::Path;
///
/// if let Some(source) = ConfigLoader::load_user_config(Path::new("/home/user")).unwrap() {
///     println!("loaded {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Location of the user configuration file below `home`.
    #[must_use]
    pub fn user_config_path(home: &Path) -> PathBuf {
        home.join(".config").join("dotmine").join("config.yaml")
    }

    /// Load the user configuration file, if there is one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config(home: &Path) -> Result<Option<ConfigSource>> {
        let path = Self::user_config_path(home);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                let config = Self::parse(&path, &contents)?;
                Ok(Some(ConfigSource { path, config }))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::read_error(&path, &e)),
        }
    }

    /// Load an explicitly requested configuration file.
    ///
    /// Unlike the user configuration, the file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_explicit(path: &Path) -> Result<ConfigSource> {
        let config = Self::load_file(path)?;
        Ok(ConfigSource {
            path: path.to_path_buf(),
            config,
        })
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Self::read_error(path, &e))?;
        Self::parse(path, &contents)
    }

    fn parse(path: &Path, contents: &str) -> Result<Config> {
        // An empty file is an empty configuration.
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(contents).map_err(|source| Error::Configuration {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read_error(path: &Path, e: &io::Error) -> Error {
        Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Failed to read configuration file: {e}"),
        }
    }
}
