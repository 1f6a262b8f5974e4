//! Availability command implementation.
//!
//! Runs the side-effect-free availability probe. Success prints
//! `available`; every refusal exits non-zero with the first failing check.

use chrono::NaiveDate;
use clap::Args;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use innkeep::{PropertyId, ReservationEngine};

/// Check whether a stay could be booked.
#[derive(Args)]
pub struct AvailabilityCommand {
    /// Property id
    #[arg(long)]
    pub property: i64,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: NaiveDate,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub end: NaiveDate,

    /// Number of guests
    #[arg(long, default_value_t = 1)]
    pub guests: u32,
}

impl AvailabilityCommand {
    /// Execute the availability command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let property = ReservationEngine::from_config(&config).check_availability(
            db.connection(),
            PropertyId::new(self.property),
            self.start,
            self.end,
            self.guests,
        )?;

        println!("available");
        if global.verbose {
            eprintln!(
                "{} ({} guests max) at {} per night",
                property.title, property.capacity, property.price_per_night
            );
        }
        Ok(())
    }
}
