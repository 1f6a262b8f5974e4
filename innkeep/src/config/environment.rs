//! Environment variable handling for configuration overrides.
//!
//! `INNKEEP_*` variables override values from configuration files.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use innkeep::config::{Config, EnvironmentConfig};
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
    /// Returns an error if any variable holds an invalid value, such as a
    /// non-numeric lock wait or an unrecognized boolean.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(seconds) = env::var("INNKEEP_MAXIMUM_LOCK_WAIT_SECONDS") {
            config.maximum_lock_wait_seconds =
                Some(seconds.trim().parse().map_err(|_| {
                    Error::validation(
                        "INNKEEP_MAXIMUM_LOCK_WAIT_SECONDS",
                        "must be a positive integer",
                    )
                })?);
        }

        if let Ok(val) = env::var("INNKEEP_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("INNKEEP_DISABLE_AUTOINIT", &val)?);
        }

        if let Ok(format) = env::var("INNKEEP_OUTPUT_FORMAT") {
            config.output_format = Some(format.parse().map_err(|_| {
                Error::validation(
                    "INNKEEP_OUTPUT_FORMAT",
                    format!("unknown format '{format}' (expected table, json, csv or tsv)"),
                )
            })?);
        }

        if let Ok(val) = env::var("INNKEEP_CASCADE_DELETE") {
            let catalog = config.catalog.get_or_insert_with(Default::default);
            catalog.cascade_delete = Some(Self::parse_bool("INNKEEP_CASCADE_DELETE", &val)?);
        }

        if let Ok(val) = env::var("INNKEEP_CANCELLED_RESERVATIONS_BLOCK") {
            let booking = config.booking.get_or_insert_with(Default::default);
            booking.cancelled_reservations_block = Some(Self::parse_bool(
                "INNKEEP_CANCELLED_RESERVATIONS_BLOCK",
                &val,
            )?);
        }

        Ok(())
    }

    /// Parse boolean from string.
    ///
    /// Accepts true/false, 1/0, yes/no, on/off, case-insensitively.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::validation(
                field,
                format!("invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_true_variants() {
        for value in ["true", "TRUE", "1", "yes", "YES", "on", "ON", " true "] {
            assert!(EnvironmentConfig::parse_bool("test", value).unwrap(), "{value}");
        }
    }

    #[test]
    fn test_parse_bool_false_variants() {
        for value in ["false", "FALSE", "0", "no", "NO", "off", "OFF"] {
            assert!(!EnvironmentConfig::parse_bool("test", value).unwrap(), "{value}");
        }
    }

    #[test]
    fn test_parse_bool_invalid() {
        let err = EnvironmentConfig::parse_bool("INNKEEP_X", "maybe").unwrap_err();
        assert!(err.to_string().contains("INNKEEP_X"));
    }
}
