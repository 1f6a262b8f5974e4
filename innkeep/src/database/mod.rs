//! Database layer for persistent storage of properties and reservations.
//!
//! This module provides a SQLite-based storage layer, including connection
//! management, schema versioning, transactions and row-level operations.
//! Row-level operations are associated functions on [`Database`] taking a
//! borrowed [`rusqlite::Connection`], so they work both on
//! [`Database::connection`] and inside [`Database::begin_transaction`].
//!
//! # Examples
//!
//! ```no_run
//! use innkeep::database::{Database, DatabaseConfig};
//! use innkeep::{Address, Property, PropertyFilter};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/innkeep.db")).unwrap();
//!
//! let address = Address::new("Rua das Flores", "10", "Centro", "Curitiba", "PR");
//! let new_property = Property::builder("Loft", address, "120".parse().unwrap())
//!     .capacity(4)
//!     .build()
//!     .unwrap();
//!
//! let tx = db.begin_transaction().unwrap();
//! let property = Database::insert_property(&tx, &new_property).unwrap();
//! tx.commit().unwrap();
//!
//! for property in Database::list_properties(db.connection(), &PropertyFilter::default()).unwrap() {
//!     println!("{} {}", property.id, property.title);
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod properties;
mod reservations;
mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

use std::os::raw::c_int;

pub use config::{
    database_path, default_data_dir, resolve_data_dir, DatabaseConfig, DATABASE_FILE_NAME,
    DATA_DIR_ENV,
};
pub use connection::Database;
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
pub use schema::CURRENT_SCHEMA_VERSION;

/// Returns the extended result code of a constraint violation, if `err`
/// is one.
fn constraint_code(err: &rusqlite::Error) -> Option<c_int> {
    match err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Some(e.extended_code)
        }
        _ => None,
    }
}

fn conversion_failure(
    column: usize,
    ty: rusqlite::types::Type,
    err: crate::Error,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, ty, Box::new(err))
}
