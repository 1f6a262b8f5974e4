//! Shared test utilities for database unit tests.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::property::{Address, NewProperty, Property};

/// Creates a temporary test database.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Keep the directory alive for the lifetime of the test process
    std::mem::forget(dir);

    db
}

/// A four-guest property at 120.00 per night on the given street.
///
/// # Panics
///
/// Panics if the property fails validation.
#[must_use]
pub fn sample_property(street: &str, number: &str) -> NewProperty {
    let address = Address::new(street, number, "Centro", "Curitiba", "PR");
    Property::builder(format!("{street} {number}"), address, "120.00".parse().unwrap())
        .rooms(2)
        .capacity(4)
        .build()
        .unwrap()
}
