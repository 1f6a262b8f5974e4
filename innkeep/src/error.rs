//! Error types for the innkeep library.
//!
//! This module provides the error hierarchy for all catalog and booking
//! operations, using `thiserror` for ergonomic error handling. Storage
//! failures are translated into domain variants at the component boundary;
//! callers classify errors through [`Error::kind`].

use std::path::PathBuf;

use thiserror::Error;

use crate::property::PropertyId;
use crate::reservation::ReservationId;

/// Result type alias for operations that may fail with an innkeep error.
///
/// # Examples
///
/// ```
/// use innkeep::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the innkeep library.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input reached the core.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The referenced entity does not exist.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The guest count exceeds the property's capacity.
    #[error("property {property_id} holds at most {capacity} guest(s), {guests} requested")]
    CapacityExceeded {
        /// The property that was asked for.
        property_id: PropertyId,
        /// The requested guest count.
        guests: u32,
        /// The property's capacity.
        capacity: u32,
    },

    /// The requested stay overlaps existing reservations.
    #[error(
        "property {property_id} is unavailable for these dates (overlaps reservation(s) {})",
        join_ids(.conflicting)
    )]
    ReservationConflict {
        /// The property that was asked for.
        property_id: PropertyId,
        /// Ids of the overlapping reservations.
        conflicting: Vec<ReservationId>,
    },

    /// A property is already registered at the same address.
    #[error("duplicate property: {details}")]
    DuplicateProperty {
        /// Details about the duplicate.
        details: String,
    },

    /// The property cannot be removed while reservations reference it.
    #[error("property {property_id} still has reservations")]
    PropertyInUse {
        /// The property that could not be removed.
        property_id: PropertyId,
    },

    /// Storage rejected a write because of an integrity constraint.
    #[error("conflict: {details}")]
    Conflict {
        /// Details about the conflict.
        details: String,
    },

    /// The store could not be reached or failed unexpectedly.
    #[error("storage is unavailable")]
    Storage(#[source] rusqlite::Error),

    /// The store stayed locked by another writer past the busy timeout.
    #[error("storage is busy (locked by another writer)")]
    StorageBusy,

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of an [`Error`].
///
/// This is the taxonomy a transport layer maps onto its own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input; never retried.
    Validation,
    /// Referenced id does not exist.
    NotFound,
    /// Guest count over capacity.
    Capacity,
    /// Overlap, duplicate or dependent rows.
    Conflict,
    /// Storage unavailable or failed.
    Storage,
    /// Bad configuration or filesystem layout.
    Configuration,
}

fn join_ids(ids: &[ReservationId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// Shorthand for building a [`Error::Validation`].
    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the taxonomy bucket this error belongs to.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::{Error, ErrorKind};
    ///
    /// let err = Error::NotFound { resource: "property 7".to_string() };
    /// assert_eq!(err.kind(), ErrorKind::NotFound);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::CapacityExceeded { .. } => ErrorKind::Capacity,
            Self::ReservationConflict { .. }
            | Self::DuplicateProperty { .. }
            | Self::PropertyInUse { .. }
            | Self::Conflict { .. } => ErrorKind::Conflict,
            Self::Storage(_) | Self::StorageBusy | Self::UnsupportedSchemaVersion { .. } => {
                ErrorKind::Storage
            }
            Self::Configuration(_) | Self::InvalidPath { .. } | Self::Io(_) => {
                ErrorKind::Configuration
            }
        }
    }

    /// Check if error belongs to the conflict class.
    ///
    /// Capacity failures surface as conflicts to callers, alongside
    /// overlaps, duplicates and blocked deletions.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::{Error, PropertyId};
    ///
    /// let err = Error::CapacityExceeded {
    ///     property_id: PropertyId::new(1),
    ///     guests: 3,
    ///     capacity: 2,
    /// };
    /// assert!(err.is_conflict());
    /// ```
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self.kind(), ErrorKind::Conflict | ErrorKind::Capacity)
    }

    /// Check if error indicates a missing entity.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Translates raw SQLite failures into the domain taxonomy.
///
/// Constraint violations become [`Error::Conflict`] and lock contention
/// becomes [`Error::StorageBusy`]. Call sites that know which constraint
/// they can trip (duplicate address, dependent reservations) map those
/// before falling back to this conversion.
impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(rusqlite::ErrorCode::ConstraintViolation) => Self::Conflict {
                details: "the write violates a storage integrity constraint".into(),
            },
            Some(rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked) => {
                Self::StorageBusy
            }
            _ => Self::Storage(err),
        }
    }
}
