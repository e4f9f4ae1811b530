//! Configuration schema definitions.
//!
//! This module defines the configuration structure for dotmine, as read
//! from `~/.config/dotmine/config.yaml`.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Name of the mine directory, relative to home, when none is configured.
pub const DEFAULT_MINE_DIR: &str = "dotmine";

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use dotmine::config::Config;
/// use std::path::{Path, PathBuf};
///
/// let config: Config = serde_yaml::from_str("mine: dotfiles").unwrap();
/// assert_eq!(config.mine, Some(PathBuf::from("dotfiles")));
/// assert_eq!(
///     config.mine_dir(Path::new("/home/user")),
///     PathBuf::from("/home/user/dotfiles")
/// );
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Location of the mine.
    ///
    /// A leading `~` and relative paths are taken relative to the home
    /// directory.
    pub mine: Option<PathBuf>,
}

impl Config {
    /// The mine directory this configuration selects for `home`.
    ///
    /// The result is not normalized; `MineRoots::new` does that.
    #[must_use]
    pub fn mine_dir(&self, home: &Path) -> PathBuf {
        let Some(mine) = &self.mine else {
            return home.join(DEFAULT_MINE_DIR);
        };

        let mut components = mine.components();
        match components.next() {
            Some(Component::Normal(first)) if first == "~" => home.join(components.as_path()),
            _ if mine.is_absolute() => mine.clone(),
            _ => home.join(mine),
        }
    }
}
