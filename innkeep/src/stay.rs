//! Half-open stay date ranges and night arithmetic.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[cfg(test)]
mod proptests;

/// A stay over `[start, end)`: the guest sleeps every night from `start`
/// up to, but not including, the night of `end`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use innkeep::StayDates;
///
/// let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 9, 4).unwrap();
/// let stay = StayDates::new(start, end).unwrap();
/// assert_eq!(stay.nights(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStay")]
pub struct StayDates {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawStay {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawStay> for StayDates {
    type Error = Error;

    fn try_from(raw: RawStay) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl StayDates {
    /// Creates a validated stay range.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `end` is not strictly after `start`,
    /// or if either date falls outside years 1 to 9999.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        check_year("start_date", start)?;
        check_year("end_date", end)?;
        if end == start {
            return Err(Error::validation(
                "end_date",
                format!("check-out must be after check-in, both are {start}"),
            ));
        }
        if end < start {
            return Err(Error::validation(
                "end_date",
                format!("check-out {end} is before check-in {start}"),
            ));
        }
        Ok(Self { start, end })
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the check-out date.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the number of nights in the stay. Always at least one.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn nights(&self) -> u32 {
        // Bounded by chrono's date range, which is well inside u32.
        (self.end - self.start).num_days() as u32
    }

    /// Returns true when both stays share at least one night.
    ///
    /// A stay ending on day D never overlaps one starting on day D.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use innkeep::StayDates;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2025, 8, day).unwrap();
    /// let booked = StayDates::new(d(10), d(12)).unwrap();
    ///
    /// assert!(booked.overlaps(&StayDates::new(d(11), d(14)).unwrap()));
    /// assert!(!booked.overlaps(&StayDates::new(d(12), d(15)).unwrap()));
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for StayDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// Counts the nights between two dates, exclusive of `end`.
///
/// # Errors
///
/// Returns a validation error if `end <= start`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use innkeep::calculate_nights;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 9, day).unwrap();
/// assert_eq!(calculate_nights(d(1), d(4)).unwrap(), 3);
/// assert!(calculate_nights(d(4), d(4)).is_err());
/// ```
pub fn calculate_nights(start: NaiveDate, end: NaiveDate) -> Result<u32> {
    StayDates::new(start, end).map(|stay| stay.nights())
}

// Stored as `YYYY-MM-DD` text; only four-digit years sort correctly.
fn check_year(field: &str, date: NaiveDate) -> Result<()> {
    if (1..=9999).contains(&date.year()) {
        Ok(())
    } else {
        Err(Error::validation(
            field,
            format!("{date} is outside the supported years 1 to 9999"),
        ))
    }
}
