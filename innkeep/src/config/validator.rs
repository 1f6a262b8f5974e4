//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Longest lock wait accepted, one hour.
const MAX_LOCK_WAIT_SECONDS: u64 = 3600;

/// Validates merged configuration.
///
/// # Examples
///
/// ```
/// use innkeep::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let zero_wait = Config { maximum_lock_wait_seconds: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&zero_wait).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the lock wait is zero or longer than
    /// an hour.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(timeout) = config.maximum_lock_wait_seconds {
            if timeout == 0 {
                return Err(Error::validation(
                    "maximum_lock_wait_seconds",
                    "timeout must be greater than 0",
                ));
            }
            if timeout > MAX_LOCK_WAIT_SECONDS {
                return Err(Error::validation(
                    "maximum_lock_wait_seconds",
                    format!("timeout must be at most {MAX_LOCK_WAIT_SECONDS} seconds"),
                ));
            }
        }

        Ok(())
    }
}
