//! Common test utilities for integration tests.
//!
//! Fixture builders and a throwaway database for exercising the catalog and
//! the booking flow end to end.

use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use innkeep::{
    Address, Database, DatabaseConfig, NewProperty, NewReservation, Property, PropertyCatalog,
    PropertyId, Reservation, StayDates,
};

/// A database in its own temporary directory.
///
/// The directory lives as long as the value.
pub struct TestStore {
    pub dir: TempDir,
    pub db: Database,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let db = Database::open(DatabaseConfig::new(dir.path().join("innkeep.db"))).unwrap();
        Self { dir, db }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("innkeep.db")
    }

    /// Stores a property built from `fixture`.
    #[allow(dead_code)]
    pub fn add_property(&mut self, fixture: PropertyFixture) -> Property {
        PropertyCatalog::new()
            .create(&mut self.db, &fixture.build())
            .unwrap()
    }
}

/// Shorthand for a 2025 date.
pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

/// Builder for test properties with sensible defaults.
///
/// Defaults: "Rua das Flores, 10", Centro, Curitiba, PR; two rooms, four
/// guests, 120.00 per night.
#[derive(Clone)]
pub struct PropertyFixture {
    title: String,
    street: String,
    number: String,
    neighborhood: String,
    city: String,
    state: String,
    capacity: u32,
    price: String,
}

#[allow(dead_code)]
impl PropertyFixture {
    pub fn new() -> Self {
        Self {
            title: "Loft Centro".to_string(),
            street: "Rua das Flores".to_string(),
            number: "10".to_string(),
            neighborhood: "Centro".to_string(),
            city: "Curitiba".to_string(),
            state: "PR".to_string(),
            capacity: 4,
            price: "120.00".to_string(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn number(mut self, number: &str) -> Self {
        self.number = number.to_string();
        self
    }

    pub fn neighborhood(mut self, neighborhood: &str) -> Self {
        self.neighborhood = neighborhood.to_string();
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.city = city.to_string();
        self
    }

    pub fn state(mut self, state: &str) -> Self {
        self.state = state.to_string();
        self
    }

    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn price(mut self, price: &str) -> Self {
        self.price = price.to_string();
        self
    }

    pub fn build(self) -> NewProperty {
        let address = Address::new(
            self.street,
            self.number,
            self.neighborhood,
            self.city,
            self.state,
        );
        Property::builder(self.title, address, self.price.parse().unwrap())
            .rooms(2)
            .capacity(self.capacity)
            .build()
            .unwrap()
    }
}

/// A booking request for `guests` guests from `start` to `end`.
pub fn booking(
    property: PropertyId,
    start: NaiveDate,
    end: NaiveDate,
    guests: u32,
) -> NewReservation {
    booking_for(property, start, end, guests, "ana@example.com")
}

/// Like [`booking`], made by a specific client email.
#[allow(dead_code)]
pub fn booking_for(
    property: PropertyId,
    start: NaiveDate,
    end: NaiveDate,
    guests: u32,
    email: &str,
) -> NewReservation {
    Reservation::builder(property, StayDates::new(start, end).unwrap())
        .client("Ana Souza", email)
        .guests(guests)
        .build()
        .unwrap()
}
