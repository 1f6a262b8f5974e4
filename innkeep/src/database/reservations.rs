//! Row-level operations on the reservations table.

use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, Type, ValueRef};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::property::PropertyId;
use crate::reservation::{NewReservation, Reservation, ReservationFilter, ReservationId};
use crate::{Money, StayDates};

use super::connection::Database;
use super::{constraint_code, conversion_failure};

impl ToSql for ReservationId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.value()))
    }
}

impl FromSql for ReservationId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(Self::new)
    }
}

const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (property_id, client_name, client_email, start_date, end_date, guests, total_price_cents, is_active)
    VALUES (?, ?, ?, ?, ?, ?, ?, 1)
";

const SELECT_RESERVATION: &str = r"
    SELECT id, property_id, client_name, client_email, start_date, end_date,
           guests, total_price_cents, is_active
    FROM reservations
    WHERE id = ?
";

const LIST_RESERVATIONS: &str = r"
    SELECT id, property_id, client_name, client_email, start_date, end_date,
           guests, total_price_cents, is_active
    FROM reservations
    WHERE (?1 IS NULL OR client_email = ?1)
      AND (?2 IS NULL OR property_id = ?2)
    ORDER BY id
";

const UPDATE_ACTIVE: &str = "UPDATE reservations SET is_active = ? WHERE id = ?";

// Half-open overlap: existing.start < end AND existing.end > start.
// Served by idx_reservations_property_dates.
const SELECT_OVERLAPPING: &str = r"
    SELECT id
    FROM reservations
    WHERE property_id = ?1
      AND start_date < ?3
      AND end_date > ?2
      AND (?4 OR is_active = 1)
    ORDER BY id
";

/// Deserializes a reservation from a row.
///
/// Expects columns in the order of [`SELECT_RESERVATION`].
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let start: NaiveDate = row.get(4)?;
    let end: NaiveDate = row.get(5)?;
    let dates = StayDates::new(start, end).map_err(|e| conversion_failure(5, Type::Text, e))?;

    let cents: i64 = row.get(7)?;
    let total_price =
        Money::from_minor_units(cents).map_err(|e| conversion_failure(7, Type::Integer, e))?;

    Ok(Reservation {
        id: row.get(0)?,
        property_id: row.get(1)?,
        client_name: row.get(2)?,
        client_email: row.get(3)?,
        dates,
        guests: row.get(6)?,
        total_price,
        is_active: row.get(8)?,
    })
}

impl Database {
    /// Inserts an active reservation with the given total.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the property does not exist,
    /// [`Error::Conflict`] if another integrity constraint rejects the row,
    /// or a storage error if the insert fails otherwise.
    pub fn insert_reservation(
        conn: &Connection,
        reservation: &NewReservation,
        total_price: Money,
    ) -> Result<Reservation> {
        let dates = reservation.dates();
        let inserted = conn.execute(
            INSERT_RESERVATION,
            params![
                reservation.property_id(),
                reservation.client_name(),
                reservation.client_email(),
                dates.start(),
                dates.end(),
                reservation.guests(),
                total_price.to_minor_units(),
            ],
        );

        match inserted {
            Ok(_) => {}
            Err(e) if constraint_code(&e) == Some(rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY) => {
                return Err(Error::NotFound {
                    resource: format!("property {}", reservation.property_id()),
                });
            }
            Err(e) => return Err(e.into()),
        }

        Ok(Reservation {
            id: ReservationId::new(conn.last_insert_rowid()),
            property_id: reservation.property_id(),
            client_name: reservation.client_name().to_string(),
            client_email: reservation.client_email().to_string(),
            dates,
            guests: reservation.guests(),
            total_price,
            is_active: true,
        })
    }

    /// Fetches a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_reservation(conn: &Connection, id: ReservationId) -> Result<Option<Reservation>> {
        Ok(conn
            .query_row(SELECT_RESERVATION, params![id], row_to_reservation)
            .optional()?)
    }

    /// Lists reservations matching `filter`, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reservations(
        conn: &Connection,
        filter: &ReservationFilter,
    ) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(LIST_RESERVATIONS)?;
        let rows = stmt.query_map(
            params![filter.client_email, filter.property_id],
            row_to_reservation,
        )?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Sets the active flag and returns the updated row, or `None` if no
    /// such reservation exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn set_reservation_active(
        conn: &Connection,
        id: ReservationId,
        active: bool,
    ) -> Result<Option<Reservation>> {
        let affected = conn.execute(UPDATE_ACTIVE, params![active, id])?;
        if affected == 0 {
            return Ok(None);
        }
        Self::get_reservation(conn, id)
    }

    /// Returns ids of reservations on `property_id` overlapping `dates`.
    ///
    /// Cancelled reservations are considered only when `include_inactive`
    /// is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_overlapping_reservations(
        conn: &Connection,
        property_id: PropertyId,
        dates: &StayDates,
        include_inactive: bool,
    ) -> Result<Vec<ReservationId>> {
        let mut stmt = conn.prepare_cached(SELECT_OVERLAPPING)?;
        let rows = stmt.query_map(
            params![property_id, dates.start(), dates.end(), include_inactive],
            |row| row.get(0),
        )?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, sample_property};
    use crate::Property;

    fn d(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    fn request(property: PropertyId, start: NaiveDate, end: NaiveDate, email: &str) -> NewReservation {
        Reservation::builder(property, StayDates::new(start, end).unwrap())
            .client("Guest", email)
            .guests(2)
            .build()
            .unwrap()
    }

    fn setup(conn: &Connection) -> Property {
        Database::insert_property(conn, &sample_property("Rua A", "1")).unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let db = create_test_database();
        let conn = db.connection();
        let property = setup(conn);

        let total: Money = "360".parse().unwrap();
        let stored = Database::insert_reservation(
            conn,
            &request(property.id, d(9, 1), d(9, 4), "ana@example.com"),
            total,
        )
        .unwrap();
        assert!(stored.is_active);

        let fetched = Database::get_reservation(conn, stored.id).unwrap().unwrap();
        assert_eq!(fetched, stored);
        assert_eq!(fetched.total_price, total);
        assert_eq!(fetched.dates.start(), d(9, 1));
    }

    #[test]
    fn test_insert_unknown_property() {
        let db = create_test_database();
        let err = Database::insert_reservation(
            db.connection(),
            &request(PropertyId::new(77), d(9, 1), d(9, 4), "ana@example.com"),
            Money::ZERO,
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_filters() {
        let db = create_test_database();
        let conn = db.connection();
        let p1 = setup(conn);
        let p2 = Database::insert_property(conn, &sample_property("Rua B", "1")).unwrap();

        let r1 = Database::insert_reservation(conn, &request(p1.id, d(9, 1), d(9, 4), "a@x.com"), Money::ZERO).unwrap();
        let r2 = Database::insert_reservation(conn, &request(p2.id, d(9, 1), d(9, 4), "a@x.com"), Money::ZERO).unwrap();
        let r3 = Database::insert_reservation(conn, &request(p1.id, d(9, 5), d(9, 6), "b@x.com"), Money::ZERO).unwrap();

        let all = Database::list_reservations(conn, &ReservationFilter::default()).unwrap();
        assert_eq!(all.iter().map(|r| r.id).collect::<Vec<_>>(), vec![r1.id, r2.id, r3.id]);

        let by_email = ReservationFilter {
            client_email: Some("a@x.com".to_string()),
            ..ReservationFilter::default()
        };
        let found = Database::list_reservations(conn, &by_email).unwrap();
        assert_eq!(found.iter().map(|r| r.id).collect::<Vec<_>>(), vec![r1.id, r2.id]);

        let both = ReservationFilter {
            client_email: Some("a@x.com".to_string()),
            property_id: Some(p1.id),
        };
        let found = Database::list_reservations(conn, &both).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, r1.id);
    }

    #[test]
    fn test_set_active() {
        let db = create_test_database();
        let conn = db.connection();
        let property = setup(conn);
        let stored = Database::insert_reservation(
            conn,
            &request(property.id, d(9, 1), d(9, 4), "ana@example.com"),
            Money::ZERO,
        )
        .unwrap();

        let updated = Database::set_reservation_active(conn, stored.id, false)
            .unwrap()
            .unwrap();
        assert!(!updated.is_active);

        assert!(
            Database::set_reservation_active(conn, ReservationId::new(999), false)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_overlap_query_is_half_open() {
        let db = create_test_database();
        let conn = db.connection();
        let property = setup(conn);
        let booked = Database::insert_reservation(
            conn,
            &request(property.id, d(8, 10), d(8, 12), "ana@example.com"),
            Money::ZERO,
        )
        .unwrap();

        let adjacent = StayDates::new(d(8, 12), d(8, 15)).unwrap();
        assert!(Database::find_overlapping_reservations(conn, property.id, &adjacent, true)
            .unwrap()
            .is_empty());

        let before = StayDates::new(d(8, 8), d(8, 10)).unwrap();
        assert!(Database::find_overlapping_reservations(conn, property.id, &before, true)
            .unwrap()
            .is_empty());

        let partial = StayDates::new(d(8, 11), d(8, 14)).unwrap();
        assert_eq!(
            Database::find_overlapping_reservations(conn, property.id, &partial, true).unwrap(),
            vec![booked.id]
        );
    }

    #[test]
    fn test_overlap_query_inactive_policy() {
        let db = create_test_database();
        let conn = db.connection();
        let property = setup(conn);
        let booked = Database::insert_reservation(
            conn,
            &request(property.id, d(8, 10), d(8, 12), "ana@example.com"),
            Money::ZERO,
        )
        .unwrap();
        Database::set_reservation_active(conn, booked.id, false).unwrap();

        let same = StayDates::new(d(8, 10), d(8, 12)).unwrap();
        assert_eq!(
            Database::find_overlapping_reservations(conn, property.id, &same, true).unwrap(),
            vec![booked.id]
        );
        assert!(Database::find_overlapping_reservations(conn, property.id, &same, false)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_overlap_query_scoped_to_property() {
        let db = create_test_database();
        let conn = db.connection();
        let p1 = setup(conn);
        let p2 = Database::insert_property(conn, &sample_property("Rua B", "1")).unwrap();
        Database::insert_reservation(conn, &request(p1.id, d(8, 10), d(8, 12), "a@x.com"), Money::ZERO).unwrap();

        let same = StayDates::new(d(8, 10), d(8, 12)).unwrap();
        assert!(Database::find_overlapping_reservations(conn, p2.id, &same, true)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_property_with_reservations_cannot_be_deleted() {
        let db = create_test_database();
        let conn = db.connection();
        let property = setup(conn);
        Database::insert_reservation(conn, &request(property.id, d(8, 10), d(8, 12), "a@x.com"), Money::ZERO).unwrap();

        let err = Database::delete_property(conn, property.id).unwrap_err();
        assert!(matches!(err, Error::PropertyInUse { .. }));

        assert_eq!(Database::delete_reservations_for_property(conn, property.id).unwrap(), 1);
        assert!(Database::delete_property(conn, property.id).unwrap());
    }
}
