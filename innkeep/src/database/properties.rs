//! Row-level operations on the properties table.
//!
//! These are associated functions over a borrowed [`Connection`] so the
//! same code runs against a plain connection or inside an open
//! transaction.

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::property::{Address, NewProperty, Property, PropertyFilter, PropertyId};
use crate::Money;

use super::connection::Database;
use super::{constraint_code, conversion_failure};

impl ToSql for PropertyId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.value()))
    }
}

impl FromSql for PropertyId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(Self::new)
    }
}

const INSERT_PROPERTY: &str = r"
    INSERT INTO properties
    (title, street, number, neighborhood, city, state, country, rooms, capacity, price_per_night_cents)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

const SELECT_PROPERTY: &str = r"
    SELECT id, title, street, number, neighborhood, city, state, country,
           rooms, capacity, price_per_night_cents
    FROM properties
    WHERE id = ?
";

// Text criteria are applied in Rust; SQLite's LOWER() only folds ASCII.
const LIST_PROPERTIES: &str = r"
    SELECT id, title, street, number, neighborhood, city, state, country,
           rooms, capacity, price_per_night_cents
    FROM properties
    WHERE (?1 IS NULL OR capacity >= ?1)
      AND (?2 IS NULL OR price_per_night_cents <= ?2)
    ORDER BY id
";

const DELETE_PROPERTY: &str = "DELETE FROM properties WHERE id = ?";

const DELETE_RESERVATIONS_FOR_PROPERTY: &str = "DELETE FROM reservations WHERE property_id = ?";

/// Deserializes a property from a row.
///
/// Expects columns in the order of [`SELECT_PROPERTY`].
fn row_to_property(row: &rusqlite::Row<'_>) -> rusqlite::Result<Property> {
    let cents: i64 = row.get(10)?;
    let price_per_night = Money::from_minor_units(cents)
        .map_err(|e| conversion_failure(10, rusqlite::types::Type::Integer, e))?;

    Ok(Property {
        id: row.get(0)?,
        title: row.get(1)?,
        address: Address {
            street: row.get(2)?,
            number: row.get(3)?,
            neighborhood: row.get(4)?,
            city: row.get(5)?,
            state: row.get(6)?,
            country: row.get(7)?,
        },
        rooms: row.get(8)?,
        capacity: row.get(9)?,
        price_per_night,
    })
}

impl Database {
    /// Inserts a property and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateProperty`] if a property already exists at
    /// the same address, or a storage error if the insert fails otherwise.
    pub fn insert_property(conn: &Connection, property: &NewProperty) -> Result<Property> {
        let address = property.address();
        let inserted = conn.execute(
            INSERT_PROPERTY,
            params![
                property.title(),
                address.street,
                address.number,
                address.neighborhood,
                address.city,
                address.state,
                address.country,
                property.rooms(),
                property.capacity(),
                property.price_per_night().to_minor_units(),
            ],
        );

        match inserted {
            Ok(_) => {}
            Err(e) if constraint_code(&e) == Some(rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE) => {
                return Err(Error::DuplicateProperty {
                    details: format!("a property is already registered at {address}"),
                });
            }
            Err(e) => return Err(e.into()),
        }

        Ok(Property {
            id: PropertyId::new(conn.last_insert_rowid()),
            title: property.title().to_string(),
            address: address.clone(),
            rooms: property.rooms(),
            capacity: property.capacity(),
            price_per_night: property.price_per_night(),
        })
    }

    /// Fetches a property by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_property(conn: &Connection, id: PropertyId) -> Result<Option<Property>> {
        Ok(conn
            .query_row(SELECT_PROPERTY, params![id], row_to_property)
            .optional()?)
    }

    /// Lists properties matching `filter`, ordered by id.
    ///
    /// Capacity and price bounds are evaluated by `SQLite`; the
    /// case-insensitive address criteria go through
    /// [`PropertyFilter::matches`].
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_properties(conn: &Connection, filter: &PropertyFilter) -> Result<Vec<Property>> {
        let mut stmt = conn.prepare(LIST_PROPERTIES)?;
        let rows = stmt.query_map(
            params![filter.min_capacity, filter.max_price.map(|p| p.to_minor_units())],
            row_to_property,
        )?;

        let mut properties = Vec::new();
        for row in rows {
            let property = row?;
            if filter.matches(&property) {
                properties.push(property);
            }
        }
        Ok(properties)
    }

    /// Deletes a property. Returns false if no such property exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PropertyInUse`] if reservations still reference the
    /// property.
    pub fn delete_property(conn: &Connection, id: PropertyId) -> Result<bool> {
        match conn.execute(DELETE_PROPERTY, params![id]) {
            Ok(affected) => Ok(affected > 0),
            // RESTRICT fires immediately and reports as a trigger constraint
            Err(e)
                if matches!(
                    constraint_code(&e),
                    Some(
                        rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
                            | rusqlite::ffi::SQLITE_CONSTRAINT_TRIGGER
                    )
                ) =>
            {
                Err(Error::PropertyInUse { property_id: id })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes every reservation of a property, returning how many went.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_reservations_for_property(conn: &Connection, id: PropertyId) -> Result<usize> {
        Ok(conn.execute(DELETE_RESERVATIONS_FOR_PROPERTY, params![id])?)
    }
}
