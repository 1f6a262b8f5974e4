//! The property catalog.
//!
//! Owns property records: creation, deletion, filtered listing and the
//! price/capacity lookup the booking flow depends on.

use rusqlite::Connection;

use crate::config::Config;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::property::{NewProperty, Property, PropertyFilter, PropertyId};
use crate::Money;

/// Catalog operations over an explicitly passed database handle.
///
/// # Examples
///
/// ```no_run
/// use innkeep::{Address, Database, DatabaseConfig, Property, PropertyCatalog};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/innkeep.db")).unwrap();
/// let catalog = PropertyCatalog::new();
///
/// let address = Address::new("Rua das Flores", "10", "Centro", "Curitiba", "PR");
/// let new_property = Property::builder("Loft", address, "120".parse().unwrap())
///     .capacity(4)
///     .build()
///     .unwrap();
/// let property = catalog.create(&mut db, &new_property).unwrap();
///
/// let (price, capacity) = catalog
///     .get_price_and_capacity(db.connection(), property.id)
///     .unwrap();
/// assert_eq!(capacity, 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropertyCatalog {
    cascade_delete: bool,
}

impl PropertyCatalog {
    /// Creates a catalog that refuses to delete referenced properties.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cascade_delete: false,
        }
    }

    /// Creates a catalog with the deletion policy from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_cascade_delete(config.cascade_delete())
    }

    /// Sets whether deleting a property also deletes its reservations.
    #[must_use]
    pub const fn with_cascade_delete(mut self, cascade: bool) -> Self {
        self.cascade_delete = cascade;
        self
    }

    /// Returns the deletion policy.
    #[must_use]
    pub const fn cascade_delete(&self) -> bool {
        self.cascade_delete
    }

    /// Stores a new property.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateProperty`] if the address is taken, or a
    /// storage error. Nothing is written on failure.
    pub fn create(&self, db: &mut Database, property: &NewProperty) -> Result<Property> {
        let tx = db.begin_transaction()?;
        let created = Database::insert_property(&tx, property)?;
        tx.commit()?;

        log::info!(
            "created property {} '{}' at {}",
            created.id,
            created.title,
            created.address
        );
        Ok(created)
    }

    /// Lists properties matching `filter`, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub fn list(&self, conn: &Connection, filter: &PropertyFilter) -> Result<Vec<Property>> {
        Database::list_properties(conn, filter)
    }

    /// Fetches a property.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the id does not resolve.
    pub fn get(&self, conn: &Connection, id: PropertyId) -> Result<Property> {
        Database::get_property(conn, id)?.ok_or_else(|| Error::NotFound {
            resource: format!("property {id}"),
        })
    }

    /// Removes a property. Returns false if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PropertyInUse`] if reservations reference the
    /// property and cascading is off. The store is unchanged on failure.
    pub fn delete(&self, db: &mut Database, id: PropertyId) -> Result<bool> {
        let tx = db.begin_transaction()?;

        if Database::get_property(&tx, id)?.is_none() {
            log::debug!("delete of unknown property {id} ignored");
            return Ok(false);
        }

        if self.cascade_delete {
            let removed = Database::delete_reservations_for_property(&tx, id)?;
            if removed > 0 {
                log::info!("removed {removed} reservation(s) of property {id}");
            }
        }

        let deleted = Database::delete_property(&tx, id)?;
        tx.commit()?;

        log::info!("deleted property {id}");
        Ok(deleted)
    }

    /// Returns the nightly price and guest capacity of a property.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the id does not resolve.
    pub fn get_price_and_capacity(&self, conn: &Connection, id: PropertyId) -> Result<(Money, u32)> {
        let property = self.get(conn, id)?;
        Ok((property.price_per_night, property.capacity))
    }
}
