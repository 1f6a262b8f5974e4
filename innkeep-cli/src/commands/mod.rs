//! CLI command implementations.
//!
//! - `property`: add, list and remove properties
//! - `availability`: probe whether a stay could be booked
//! - `reservation`: book, list and cancel reservations

pub mod availability;
pub mod property;
pub mod reservation;

pub use availability::AvailabilityCommand;
pub use property::{PropertyAction, PropertyCommand};
pub use reservation::{ReservationAction, ReservationCommand};
