//! Property commands.
//!
//! `property add` registers a property and prints its id, `property list`
//! shows the catalog with optional filters, and `property remove` deletes
//! a property that has no reservations (or cascades, when configured).

use clap::{Args, Subcommand};

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, parse_output_format, write_rows, GlobalOptions, Tabular,
};
use innkeep::config::OutputFormat;
use innkeep::{Address, Money, Property, PropertyCatalog, PropertyFilter, PropertyId};

/// Manage properties.
#[derive(Args)]
pub struct PropertyCommand {
    #[command(subcommand)]
    pub action: PropertyAction,
}

/// Property subcommands.
#[derive(Subcommand)]
pub enum PropertyAction {
    /// Register a new property
    Add(AddPropertyArgs),

    /// List properties
    List(ListPropertiesArgs),

    /// Remove a property
    Remove(RemovePropertyArgs),
}

/// Arguments of `property add`.
#[derive(Args)]
pub struct AddPropertyArgs {
    /// Listing title
    #[arg(long)]
    pub title: String,

    /// Street name
    #[arg(long)]
    pub street: String,

    /// House or building number
    #[arg(long)]
    pub number: String,

    /// Neighborhood
    #[arg(long)]
    pub neighborhood: String,

    /// City
    #[arg(long)]
    pub city: String,

    /// State code
    #[arg(long)]
    pub state: String,

    /// Three-letter country code
    #[arg(long, default_value = "BRA")]
    pub country: String,

    /// Number of rooms
    #[arg(long, default_value_t = 1)]
    pub rooms: u32,

    /// Maximum number of guests
    #[arg(long)]
    pub capacity: u32,

    /// Price per night, e.g. 120.00
    #[arg(long, value_name = "AMOUNT")]
    pub price: Money,
}

/// Arguments of `property list`.
#[derive(Args)]
pub struct ListPropertiesArgs {
    /// Neighborhood contains (case-insensitive)
    #[arg(long)]
    pub neighborhood: Option<String>,

    /// City contains (case-insensitive)
    #[arg(long)]
    pub city: Option<String>,

    /// State contains (case-insensitive)
    #[arg(long)]
    pub state: Option<String>,

    /// At least this many guests
    #[arg(long, value_name = "GUESTS")]
    pub min_capacity: Option<u32>,

    /// At most this price per night
    #[arg(long, value_name = "AMOUNT")]
    pub max_price: Option<Money>,

    /// Output format: table, json, csv or tsv
    #[arg(long, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,
}

/// Arguments of `property remove`.
#[derive(Args)]
pub struct RemovePropertyArgs {
    /// Property id
    pub id: i64,
}

impl PropertyCommand {
    /// Execute the property command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match self.action {
            PropertyAction::Add(args) => args.execute(global),
            PropertyAction::List(args) => args.execute(global),
            PropertyAction::Remove(args) => args.execute(global),
        }
    }
}

impl AddPropertyArgs {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let address = Address::new(
            self.street,
            self.number,
            self.neighborhood,
            self.city,
            self.state,
        )
        .with_country(self.country);
        let new_property = Property::builder(self.title, address, self.price)
            .rooms(self.rooms)
            .capacity(self.capacity)
            .build()?;

        let property = PropertyCatalog::from_config(&config).create(&mut db, &new_property)?;

        println!("{}", property.id);
        if !global.quiet {
            eprintln!("Added property '{}' at {}", property.title, property.address);
        }
        Ok(())
    }
}

impl ListPropertiesArgs {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let filter = PropertyFilter {
            neighborhood: self.neighborhood,
            city: self.city,
            state: self.state,
            min_capacity: self.min_capacity,
            max_price: self.max_price,
        };
        let properties = PropertyCatalog::from_config(&config).list(db.connection(), &filter)?;

        write_rows(&properties, self.format.unwrap_or(config.output_format()))
    }
}

impl RemovePropertyArgs {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let id = PropertyId::new(self.id);
        if !PropertyCatalog::from_config(&config).delete(&mut db, id)? {
            return Err(CliError::NotFound(format!("property {id}")));
        }

        if !global.quiet {
            eprintln!("Removed property {id}");
        }
        Ok(())
    }
}

impl Tabular for Property {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "title",
        "street",
        "number",
        "neighborhood",
        "city",
        "state",
        "country",
        "rooms",
        "capacity",
        "price_per_night",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.address.street.clone(),
            self.address.number.clone(),
            self.address.neighborhood.clone(),
            self.address.city.clone(),
            self.address.state.clone(),
            self.address.country.clone(),
            self.rooms.to_string(),
            self.capacity.to_string(),
            self.price_per_night.to_string(),
        ]
    }
}
