//! Reservation commands.
//!
//! `reservation book` runs the full booking flow (availability, pricing
//! and insert in one transaction), `reservation list` shows the ledger and
//! `reservation cancel` deactivates a reservation.

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, parse_output_format, write_rows, GlobalOptions, Tabular,
};
use innkeep::config::OutputFormat;
use innkeep::{
    PropertyId, Reservation, ReservationEngine, ReservationFilter, ReservationId, StayDates,
};

/// Manage reservations.
#[derive(Args)]
pub struct ReservationCommand {
    #[command(subcommand)]
    pub action: ReservationAction,
}

/// Reservation subcommands.
#[derive(Subcommand)]
pub enum ReservationAction {
    /// Book a stay
    Book(BookArgs),

    /// List reservations
    List(ListReservationsArgs),

    /// Cancel a reservation
    Cancel(CancelArgs),
}

/// Output format for single-record commands.
#[derive(Clone, Copy, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RecordFormat {
    /// Plain text
    #[default]
    Text,
    /// JSON
    Json,
}

/// Arguments of `reservation book`.
#[derive(Args)]
pub struct BookArgs {
    /// Property id
    #[arg(long)]
    pub property: i64,

    /// Client name
    #[arg(long)]
    pub name: String,

    /// Client email
    #[arg(long)]
    pub email: String,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: NaiveDate,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub end: NaiveDate,

    /// Number of guests
    #[arg(long, default_value_t = 1)]
    pub guests: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t, ignore_case = true)]
    pub format: RecordFormat,
}

/// Arguments of `reservation list`.
#[derive(Args)]
pub struct ListReservationsArgs {
    /// Only reservations made with this email
    #[arg(long)]
    pub email: Option<String>,

    /// Only reservations for this property
    #[arg(long)]
    pub property: Option<i64>,

    /// Output format: table, json, csv or tsv
    #[arg(long, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,
}

/// Arguments of `reservation cancel`.
#[derive(Args)]
pub struct CancelArgs {
    /// Reservation id
    pub id: i64,

    /// Output format
    #[arg(long, value_enum, default_value_t, ignore_case = true)]
    pub format: RecordFormat,
}

impl ReservationCommand {
    /// Execute the reservation command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match self.action {
            ReservationAction::Book(args) => args.execute(global),
            ReservationAction::List(args) => args.execute(global),
            ReservationAction::Cancel(args) => args.execute(global),
        }
    }
}

impl BookArgs {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dates = StayDates::new(self.start, self.end)?;
        let request = Reservation::builder(PropertyId::new(self.property), dates)
            .client(self.name, self.email)
            .guests(self.guests)
            .build()?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let confirmation = ReservationEngine::from_config(&config).book(&mut db, &request)?;

        match self.format {
            RecordFormat::Text => {
                println!("{}", confirmation.message);
                if !global.quiet {
                    eprintln!("Reservation id: {}", confirmation.reservation.id);
                }
            }
            RecordFormat::Json => println!("{}", serde_json::to_string_pretty(&confirmation)?),
        }
        Ok(())
    }
}

impl ListReservationsArgs {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let filter = ReservationFilter {
            client_email: self.email,
            property_id: self.property.map(PropertyId::new),
        };
        let reservations = ReservationEngine::from_config(&config).list(db.connection(), &filter)?;

        write_rows(&reservations, self.format.unwrap_or(config.output_format()))
    }
}

impl CancelArgs {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let id = ReservationId::new(self.id);
        let reservation = ReservationEngine::from_config(&config)
            .deactivate(&mut db, id)?
            .ok_or_else(|| CliError::NotFound(format!("reservation {id}")))?;

        match self.format {
            RecordFormat::Text => println!("{}", reservation.cells().join("\t")),
            RecordFormat::Json => println!("{}", serde_json::to_string_pretty(&reservation)?),
        }
        Ok(())
    }
}

impl Tabular for Reservation {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "property_id",
        "client_name",
        "client_email",
        "start",
        "end",
        "guests",
        "total_price",
        "is_active",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.property_id.to_string(),
            self.client_name.clone(),
            self.client_email.clone(),
            self.dates.start().to_string(),
            self.dates.end().to_string(),
            self.guests.to_string(),
            self.total_price.to_string(),
            self.is_active.to_string(),
        ]
    }
}
