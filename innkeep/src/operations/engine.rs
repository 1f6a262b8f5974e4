//! The reservation engine.
//!
//! Conflict detection, the availability probe, pricing and the
//! reservation lifecycle. Overlap is half-open: a stay ending on day D
//! never conflicts with one starting on day D.

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::config::Config;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::property::{Property, PropertyId};
use crate::reservation::{
    BookingConfirmation, NewReservation, Reservation, ReservationFilter, ReservationId,
};
use crate::stay::{calculate_nights, StayDates};

use super::catalog::PropertyCatalog;

/// Booking operations over an explicitly passed database handle.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use innkeep::{Database, DatabaseConfig, PropertyId, Reservation, ReservationEngine, StayDates};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/innkeep.db")).unwrap();
/// let engine = ReservationEngine::new();
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 9, day).unwrap();
/// let request = Reservation::builder(PropertyId::new(1), StayDates::new(d(1), d(4)).unwrap())
///     .client("Ana Souza", "ana@example.com")
///     .guests(2)
///     .build()
///     .unwrap();
///
/// let confirmation = engine.book(&mut db, &request).unwrap();
/// println!("{}", confirmation.message);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationEngine {
    catalog: PropertyCatalog,
    cancelled_reservations_block: bool,
}

impl Default for ReservationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationEngine {
    /// Creates an engine with a default catalog where cancelled
    /// reservations still block their dates.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            catalog: PropertyCatalog::new(),
            cancelled_reservations_block: true,
        }
    }

    /// Creates an engine and its catalog from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_catalog(PropertyCatalog::from_config(config))
            .with_cancelled_reservations_block(config.cancelled_reservations_block())
    }

    /// Sets the catalog used for price and capacity lookups.
    #[must_use]
    pub const fn with_catalog(mut self, catalog: PropertyCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Sets whether cancelled reservations count as conflicts.
    #[must_use]
    pub const fn with_cancelled_reservations_block(mut self, block: bool) -> Self {
        self.cancelled_reservations_block = block;
        self
    }

    /// Returns ids of reservations on `property_id` overlapping `dates`,
    /// ascending.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub fn find_conflicts(
        &self,
        conn: &Connection,
        property_id: PropertyId,
        dates: &StayDates,
    ) -> Result<Vec<ReservationId>> {
        let conflicts = Database::find_overlapping_reservations(
            conn,
            property_id,
            dates,
            self.cancelled_reservations_block,
        )?;
        if !conflicts.is_empty() {
            log::debug!(
                "property {property_id}: {} conflict(s) for {dates}",
                conflicts.len()
            );
        }
        Ok(conflicts)
    }

    /// Answers whether a booking could succeed, without side effects.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// 1. dates: `end` must be after `start`, even for unknown properties
    /// 2. existence of the property
    /// 3. guest count against capacity
    /// 4. overlap with existing reservations
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`], [`Error::NotFound`],
    /// [`Error::CapacityExceeded`] or [`Error::ReservationConflict`]
    /// respectively.
    pub fn check_availability(
        &self,
        conn: &Connection,
        property_id: PropertyId,
        start: NaiveDate,
        end: NaiveDate,
        guests: u32,
    ) -> Result<Property> {
        let dates = StayDates::new(start, end)?;

        let property = self.catalog.get(conn, property_id)?;

        if guests > property.capacity {
            return Err(Error::CapacityExceeded {
                property_id,
                guests,
                capacity: property.capacity,
            });
        }

        let conflicting = self.find_conflicts(conn, property_id, &dates)?;
        if !conflicting.is_empty() {
            return Err(Error::ReservationConflict {
                property_id,
                conflicting,
            });
        }

        Ok(property)
    }

    /// Prices and stores a reservation in its own transaction.
    ///
    /// Only the price lookup is revalidated here; overlap and capacity are
    /// the caller's job via [`Self::check_availability`], or use
    /// [`Self::book`] for the whole flow.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the property does not exist, or a
    /// conflict-class error if storage rejects the row. Nothing is written
    /// on failure.
    pub fn create(
        &self,
        db: &mut Database,
        request: &NewReservation,
    ) -> Result<BookingConfirmation> {
        let tx = db.begin_transaction()?;
        let confirmation = self.create_in(&tx, request)?;
        tx.commit()?;
        Ok(confirmation)
    }

    /// Runs the full booking flow in one transaction: availability with the
    /// request's guest count, then pricing and insert.
    ///
    /// # Errors
    ///
    /// Returns any error of [`Self::check_availability`] or
    /// [`Self::create`]. Nothing is written on failure.
    pub fn book(&self, db: &mut Database, request: &NewReservation) -> Result<BookingConfirmation> {
        let tx = db.begin_transaction()?;
        let dates = request.dates();

        if let Err(e) = self.check_availability(
            &tx,
            request.property_id(),
            dates.start(),
            dates.end(),
            request.guests(),
        ) {
            log::info!(
                "booking refused for property {} ({dates}): {e}",
                request.property_id()
            );
            return Err(e);
        }

        let confirmation = self.create_in(&tx, request)?;
        tx.commit()?;
        Ok(confirmation)
    }

    fn create_in(&self, conn: &Connection, request: &NewReservation) -> Result<BookingConfirmation> {
        let (price, _capacity) = self
            .catalog
            .get_price_and_capacity(conn, request.property_id())?;

        let dates = request.dates();
        let nights = calculate_nights(dates.start(), dates.end())?;
        let total = price.times(nights)?;

        let reservation = Database::insert_reservation(conn, request, total)?;
        log::info!(
            "reservation {} created for property {} ({dates}, {nights} night(s), total {total})",
            reservation.id,
            reservation.property_id
        );
        Ok(BookingConfirmation::new(reservation))
    }

    /// Lists reservations matching `filter`, ordered by id.
    ///
    /// A blank email criterion is ignored.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub fn list(&self, conn: &Connection, filter: &ReservationFilter) -> Result<Vec<Reservation>> {
        let filter = ReservationFilter {
            client_email: filter
                .client_email
                .as_deref()
                .map(str::trim)
                .filter(|email| !email.is_empty())
                .map(ToString::to_string),
            property_id: filter.property_id,
        };
        Database::list_reservations(conn, &filter)
    }

    /// Cancels a reservation. Returns `None` if it does not exist.
    ///
    /// Cancelling twice is not an error; the second call returns the
    /// already-inactive record.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the update fails.
    pub fn deactivate(&self, db: &mut Database, id: ReservationId) -> Result<Option<Reservation>> {
        let tx = db.begin_transaction()?;
        let updated = Database::set_reservation_active(&tx, id, false)?;
        tx.commit()?;

        match &updated {
            Some(_) => log::info!("reservation {id} cancelled"),
            None => log::debug!("cancel of unknown reservation {id} ignored"),
        }
        Ok(updated)
    }
}
