//! Fixed-point currency amounts.
//!
//! Nightly prices and reservation totals are carried as [`Money`], a thin
//! wrapper over [`rust_decimal::Decimal`] restricted to non-negative values
//! with at most two fractional digits. Storage keeps amounts as integer
//! cents so range predicates stay exact.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Number of fractional digits carried by every amount.
pub const MONEY_SCALE: u32 = 2;

/// A non-negative currency amount with cent precision.
///
/// # Examples
///
/// ```
/// use innkeep::Money;
///
/// let nightly: Money = "120".parse().unwrap();
/// let total = nightly.times(3).unwrap();
/// assert_eq!(total.to_string(), "360.00");
/// assert_eq!(total.to_minor_units(), 36_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates an amount from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the value is negative, carries more
    /// than two fractional digits, or does not fit in `i64` cents.
    pub fn new(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(Error::validation("amount", "must not be negative"));
        }
        if value.normalize().scale() > MONEY_SCALE {
            return Err(Error::validation(
                "amount",
                format!("at most {MONEY_SCALE} fractional digits are allowed, got {value}"),
            ));
        }

        let mut scaled = value;
        scaled.rescale(MONEY_SCALE);
        if i64::try_from(scaled.mantissa()).is_err() {
            return Err(Error::validation("amount", "value is too large"));
        }
        Ok(Self(scaled))
    }

    /// Rebuilds an amount from integer cents as stored on disk.
    ///
    /// # Errors
    ///
    /// Returns a validation error for negative cents.
    pub fn from_minor_units(cents: i64) -> Result<Self> {
        if cents < 0 {
            return Err(Error::validation("amount", "must not be negative"));
        }
        Ok(Self(Decimal::new(cents, MONEY_SCALE)))
    }

    /// Returns the amount in integer cents.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_minor_units(&self) -> i64 {
        // The constructors guarantee the mantissa fits.
        self.0.mantissa() as i64
    }

    /// Multiplies the amount by a number of nights.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the product overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::Money;
    ///
    /// let nightly: Money = "99.99".parse().unwrap();
    /// assert_eq!(nightly.times(7).unwrap().to_string(), "699.93");
    /// ```
    pub fn times(&self, nights: u32) -> Result<Self> {
        let product = self
            .0
            .checked_mul(Decimal::from(nights))
            .ok_or_else(|| Error::validation("total_price", "amount overflows"))?;
        Self::new(product).map_err(|_| Error::validation("total_price", "amount overflows"))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.0;
        value.rescale(MONEY_SCALE);
        write!(f, "{value}")
    }
}

impl FromStr for Money {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| Error::validation("amount", format!("'{s}' is not a decimal: {e}")))?;
        Self::new(value)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
