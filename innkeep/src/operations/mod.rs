//! Catalog and booking components.
//!
//! Both components are stateless apart from their policy flags and take
//! the database handle as a parameter on every call. Mutating operations
//! run inside a single `IMMEDIATE` transaction; reads take a plain
//! [`rusqlite::Connection`] so they can also run inside a caller's
//! transaction.
//!
//! # Examples
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use innkeep::config::ConfigBuilder;
//! use innkeep::{Database, DatabaseConfig, PropertyId, ReservationEngine};
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let db = Database::open(DatabaseConfig::new("/tmp/innkeep.db")).unwrap();
//! let engine = ReservationEngine::from_config(&config);
//!
//! let d = |day| NaiveDate::from_ymd_opt(2025, 8, day).unwrap();
//! match engine.check_availability(db.connection(), PropertyId::new(1), d(13), d(15), 2) {
//!     Ok(property) => println!("{} is available", property.title),
//!     Err(e) => println!("not available: {e}"),
//! }
//! ```

pub mod catalog;
pub mod engine;

pub use catalog::PropertyCatalog;
pub use engine::ReservationEngine;
