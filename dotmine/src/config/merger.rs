//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use dotmine::config::{Config, ConfigMerger};
/// use std::path::PathBuf;
///
/// let low = Config { mine: Some(PathBuf::from("low")) };
/// let high = Config { mine: Some(PathBuf::from("high")) };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.mine, Some(PathBuf::from("high")));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configuration sources, given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target if set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.mine.is_some() {
            target.mine.clone_from(&source.mine);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_unset_field_does_not_override() {
        let mut target = Config {
            mine: Some(PathBuf::from("kept")),
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.mine, Some(PathBuf::from("kept")));
    }

    #[test]
    fn test_merge_applies_in_order() {
        let sources = vec![
            ConfigSource {
                path: PathBuf::from("a.yaml"),
                config: Config {
                    mine: Some(PathBuf::from("first")),
                },
            },
            ConfigSource {
                path: PathBuf::from("b.yaml"),
                config: Config {
                    mine: Some(PathBuf::from("second")),
                },
            },
        ];
        assert_eq!(
            ConfigMerger::merge(sources).mine,
            Some(PathBuf::from("second"))
        );
    }
}
