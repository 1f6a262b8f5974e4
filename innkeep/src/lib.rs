#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # innkeep
//!
//! A library for booking date-ranged stays against rental properties.
//!
//! It keeps a catalog of properties and a ledger of reservations in SQLite,
//! and guarantees that no two reservations on the same property overlap,
//! that guest counts respect capacity, and that every reservation is priced
//! at nightly price times nights.
//!
//! ## Core Types
//!
//! - [`Property`], [`Address`] and [`PropertyFilter`]: the catalog model
//! - [`Reservation`], [`StayDates`] and [`BookingConfirmation`]: the ledger model
//! - [`Money`]: fixed-point amounts with two fractional digits
//! - [`PropertyCatalog`] and [`ReservationEngine`]: the operations
//! - [`Database`]: the SQLite store
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use innkeep::{calculate_nights, Money, StayDates};
//!
//! let d = |day| NaiveDate::from_ymd_opt(2025, 9, day).unwrap();
//! assert_eq!(calculate_nights(d(1), d(4)).unwrap(), 3);
//!
//! let stay = StayDates::new(d(1), d(4)).unwrap();
//! let price: Money = "120".parse().unwrap();
//! assert_eq!(price.times(stay.nights()).unwrap().to_string(), "360.00");
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod money;
pub mod operations;
pub mod property;
pub mod reservation;
pub mod stay;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, ErrorKind, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use money::Money;
pub use operations::{PropertyCatalog, ReservationEngine};
pub use property::{Address, NewProperty, Property, PropertyBuilder, PropertyFilter, PropertyId};
pub use reservation::{
    BookingConfirmation, NewReservation, Reservation, ReservationBuilder, ReservationFilter,
    ReservationId,
};
pub use stay::{calculate_nights, StayDates};
