//! Assembling the effective configuration from all sources.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use crate::path::MineRoots;
use std::path::PathBuf;

/// Builds the effective [`Config`] and the [`MineRoots`] it selects.
///
/// Sources are merged from lowest to highest precedence: built-in defaults,
/// the configuration file, `DOTMINE_*` environment variables, and finally a
/// programmatic override.
///
/// # Examples
///
/// ```
/// use dotmine::config::{Config, ConfigBuilder};
/// use std::path::{Path, PathBuf};
///
/// let roots = ConfigBuilder::new()
///     .with_home_dir("/home/user")
///     .skip_files()
///     .skip_env()
///     .with_config(Config { mine: Some(PathBuf::from("dots")) })
///     .build_roots()
///     .unwrap();
///
/// assert_eq!(roots.mine(), Path::new("/home/user/dots"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    home_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `home` instead of the current user's home directory.
    #[must_use]
    pub fn with_home_dir(mut self, home: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home.into());
        self
    }

    /// Read this file instead of `~/.config/dotmine/config.yaml`.
    ///
    /// The file must exist.
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `DOTMINE_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge all sources into the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined, a
    /// configuration file cannot be read or parsed, an environment variable
    /// is invalid, or the merged configuration fails validation.
    pub fn build(&self) -> Result<Config> {
        let mut sources = Vec::new();
        if !self.skip_files {
            if let Some(ref path) = self.config_file {
                sources.push(ConfigLoader::load_explicit(path)?);
            } else if let Some(source) = ConfigLoader::load_user_config(&self.home()?)? {
                sources.push(source);
            }
        }
        for source in &sources {
            log::debug!("loaded configuration from `{}`", source.path.display());
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Build the configuration and resolve the home and mine roots.
    ///
    /// # Errors
    ///
    /// Returns every error of [`ConfigBuilder::build`], and an error if the
    /// home directory is not absolute.
    pub fn build_roots(&self) -> Result<MineRoots> {
        let config = self.build()?;
        let home = self.home()?;
        let mine = config.mine_dir(&home);
        log::debug!("home is `{}`, mine is `{}`", home.display(), mine.display());
        MineRoots::new(home, mine)
    }

    fn home(&self) -> Result<PathBuf> {
        match self.home_dir {
            Some(ref home) => Ok(home.clone()),
            None => home::home_dir().ok_or_else(|| Error::Validation {
                field: "home".into(),
                message: "Could not determine home directory".into(),
            }),
        }
    }
}
