//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use dotmine::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the mine path is empty or contains a
    /// null byte.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref mine) = config.mine {
            if mine.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "mine".into(),
                    message: "Cannot be empty".into(),
                });
            }

            if mine.to_string_lossy().contains('\0') {
                return Err(Error::Validation {
                    field: "mine".into(),
                    message: "Cannot contain null bytes".into(),
                });
            }
        }

        Ok(())
    }
}
