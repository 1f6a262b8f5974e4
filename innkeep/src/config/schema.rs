//! Configuration schema definitions.
//!
//! Every field is optional so that partial files and environment overrides
//! can be layered; the accessor methods on [`Config`] supply defaults.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default lock wait when none is configured.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use innkeep::config::{BookingConfig, Config};
///
/// let config = Config {
///     booking: Some(BookingConfig {
///         cancelled_reservations_block: Some(false),
///     }),
///     ..Default::default()
/// };
/// assert!(!config.cancelled_reservations_block());
/// assert!(!config.cascade_delete());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum time to wait for the database write lock (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Refuse to create a missing database.
    pub disable_autoinit: Option<bool>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,

    /// Property catalog settings.
    pub catalog: Option<CatalogConfig>,

    /// Booking settings.
    pub booking: Option<BookingConfig>,
}

impl Config {
    /// Returns the configured lock wait, defaulting to five seconds.
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// Returns whether a missing database may be created.
    #[must_use]
    pub fn autoinit_enabled(&self) -> bool {
        !self.disable_autoinit.unwrap_or(false)
    }

    /// Returns the listing format, defaulting to a table.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Returns whether deleting a property also deletes its reservations.
    #[must_use]
    pub fn cascade_delete(&self) -> bool {
        self.catalog
            .as_ref()
            .and_then(|c| c.cascade_delete)
            .unwrap_or(false)
    }

    /// Returns whether cancelled reservations still block their dates.
    #[must_use]
    pub fn cancelled_reservations_block(&self) -> bool {
        self.booking
            .as_ref()
            .and_then(|b| b.cancelled_reservations_block)
            .unwrap_or(true)
    }
}

/// Property catalog configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Delete a property's reservations together with the property
    /// instead of refusing the deletion.
    pub cascade_delete: Option<bool>,
}

/// Booking configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BookingConfig {
    /// Whether cancelled reservations still count as conflicts.
    pub cancelled_reservations_block: Option<bool>,
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use innkeep::config::OutputFormat;
///
/// let format: OutputFormat = "JSON".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(Error::validation(
                "output_format",
                format!("unknown format '{s}' (expected table, json, csv or tsv)"),
            )),
        }
    }
}
