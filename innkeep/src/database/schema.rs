//! Database schema definitions and SQL constants.
//!
//! This module contains the table definitions, indices and metadata
//! statements for the property catalog and reservation book.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the properties table.
///
/// Prices are integer cents. The full address is unique, which is what
/// rejects a second property registered at the same place.
pub const CREATE_PROPERTIES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS properties (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        street TEXT NOT NULL,
        number TEXT NOT NULL,
        neighborhood TEXT NOT NULL,
        city TEXT NOT NULL,
        state TEXT NOT NULL,
        country TEXT NOT NULL,
        rooms INTEGER NOT NULL CHECK (rooms >= 0),
        capacity INTEGER NOT NULL CHECK (capacity >= 0),
        price_per_night_cents INTEGER NOT NULL CHECK (price_per_night_cents >= 0),
        UNIQUE (street, number, neighborhood, city, state, country)
    )";

/// SQL statement to create the reservations table.
///
/// Dates are ISO-8601 text with four-digit years, so lexical comparison is date comparison.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE RESTRICT,
        client_name TEXT NOT NULL,
        client_email TEXT NOT NULL,
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        guests INTEGER NOT NULL CHECK (guests >= 0),
        total_price_cents INTEGER NOT NULL CHECK (total_price_cents >= 0),
        is_active INTEGER NOT NULL DEFAULT 1 CHECK (is_active IN (0, 1)),
        CHECK (end_date > start_date)
    )";

/// SQL statement to create the index backing conflict detection.
pub const CREATE_PROPERTY_DATES_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_reservations_property_dates
    ON reservations(property_id, start_date, end_date)";

/// SQL statement to create an index on the client email column.
///
/// This index speeds up filtered lists by client.
pub const CREATE_CLIENT_EMAIL_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_client_email ON reservations(client_email)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";
