//! Transaction management.
//!
//! Every mutating catalog or booking call runs inside one transaction
//! opened here. Dropping a [`Transaction`] without committing rolls it
//! back, so an early `?` return leaves the store unchanged.

use rusqlite::{Transaction, TransactionBehavior};

use crate::error::Result;

use super::connection::Database;

impl Database {
    /// Opens an `IMMEDIATE` transaction.
    ///
    /// The write lock is taken up front, before any availability reads, so
    /// two writers racing for the same dates are serialized: the second one
    /// waits up to the busy timeout and then observes the first's commit.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::StorageBusy`] if another writer holds the
    /// lock past the busy timeout.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use innkeep::database::{Database, DatabaseConfig};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/innkeep.db")).unwrap();
    /// let tx = db.begin_transaction().unwrap();
    /// // ... row-level operations against &tx ...
    /// tx.commit().unwrap();
    /// ```
    pub fn begin_transaction(&mut self) -> Result<Transaction<'_>> {
        Ok(self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?)
    }
}
