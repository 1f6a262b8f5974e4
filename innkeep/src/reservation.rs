//! Reservation records and booking confirmations.
//!
//! A reservation books one property for a client over a [`StayDates`]
//! range. Reservations are never hard-deleted; cancelling one clears its
//! `is_active` flag.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::property::{bounded_text, PropertyId};
use crate::{Money, StayDates};

/// Storage-assigned identifier of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(i64);

impl ReservationId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Identifier assigned on creation.
    pub id: ReservationId,
    /// The booked property.
    pub property_id: PropertyId,
    /// Name of the client.
    pub client_name: String,
    /// Contact email of the client.
    pub client_email: String,
    /// The booked nights.
    #[serde(flatten)]
    pub dates: StayDates,
    /// Number of guests.
    pub guests: u32,
    /// Nightly price times nights, fixed at booking time.
    pub total_price: Money,
    /// False once the reservation has been cancelled.
    pub is_active: bool,
}

impl Reservation {
    /// Starts building a reservation request.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use innkeep::{PropertyId, Reservation, StayDates};
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2025, 9, day).unwrap();
    /// let request = Reservation::builder(PropertyId::new(1), StayDates::new(d(1), d(4)).unwrap())
    ///     .client("Ana Souza", "ana@example.com")
    ///     .guests(2)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(request.dates().nights(), 3);
    /// ```
    #[must_use]
    pub fn builder(property_id: PropertyId, dates: StayDates) -> ReservationBuilder {
        ReservationBuilder {
            property_id,
            dates,
            client_name: String::new(),
            client_email: String::new(),
            guests: 1,
        }
    }
}

/// A validated reservation request that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    property_id: PropertyId,
    client_name: String,
    client_email: String,
    dates: StayDates,
    guests: u32,
}

impl NewReservation {
    /// Returns the requested property.
    #[must_use]
    pub const fn property_id(&self) -> PropertyId {
        self.property_id
    }

    /// Returns the client name.
    #[must_use]
    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// Returns the client email.
    #[must_use]
    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    /// Returns the requested stay.
    #[must_use]
    pub const fn dates(&self) -> StayDates {
        self.dates
    }

    /// Returns the guest count.
    #[must_use]
    pub const fn guests(&self) -> u32 {
        self.guests
    }
}

/// Builder for [`NewReservation`].
#[derive(Debug)]
pub struct ReservationBuilder {
    property_id: PropertyId,
    dates: StayDates,
    client_name: String,
    client_email: String,
    guests: u32,
}

impl ReservationBuilder {
    /// Sets the client's name and email.
    #[must_use]
    pub fn client(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.client_name = name.into();
        self.client_email = email.into();
        self
    }

    /// Sets the guest count. Defaults to one.
    #[must_use]
    pub const fn guests(mut self, guests: u32) -> Self {
        self.guests = guests;
        self
    }

    /// Validates and builds the request.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the client name or email is blank or
    /// longer than 255 characters.
    pub fn build(self) -> Result<NewReservation> {
        Ok(NewReservation {
            property_id: self.property_id,
            client_name: bounded_text("client_name", &self.client_name, 1, 255)?,
            client_email: bounded_text("client_email", &self.client_email, 1, 255)?,
            dates: self.dates,
            guests: self.guests,
        })
    }
}

/// Optional criteria for listing reservations, matched exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationFilter {
    /// Only reservations made with this email.
    pub client_email: Option<String>,
    /// Only reservations for this property.
    pub property_id: Option<PropertyId>,
}

/// Result of a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// Human-readable summary with nights and total.
    pub message: String,
    /// The stored reservation.
    pub reservation: Reservation,
}

impl BookingConfirmation {
    pub(crate) fn new(reservation: Reservation) -> Self {
        let message = format!(
            "Reservation confirmed: {} night(s), total amount {}",
            reservation.dates.nights(),
            reservation.total_price
        );
        Self {
            message,
            reservation,
        }
    }
}
