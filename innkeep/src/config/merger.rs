//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{BookingConfig, CatalogConfig, Config};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use innkeep::config::{Config, ConfigMerger};
///
/// let low = Config { maximum_lock_wait_seconds: Some(2), ..Default::default() };
/// let high = Config { maximum_lock_wait_seconds: Some(9), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.maximum_lock_wait_seconds, Some(9));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Scalar fields are overwritten when set in `source`; nested sections
    /// merge field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_catalog) = source.catalog {
            target.catalog = Some(match &target.catalog {
                Some(target_catalog) => CatalogConfig {
                    cascade_delete: source_catalog
                        .cascade_delete
                        .or(target_catalog.cascade_delete),
                },
                None => source_catalog.clone(),
            });
        }

        if let Some(ref source_booking) = source.booking {
            target.booking = Some(match &target.booking {
                Some(target_booking) => BookingConfig {
                    cancelled_reservations_block: source_booking
                        .cancelled_reservations_block
                        .or(target_booking.cancelled_reservations_block),
                },
                None => source_booking.clone(),
            });
        }
    }
}
