//! Property records, validated construction and listing filters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::Money;

/// Country code used when an address does not name one.
pub const DEFAULT_COUNTRY: &str = "BRA";

/// Nightly prices must fit `NUMERIC(10,2)`.
const MAX_PRICE_CENTS: i64 = 10_000_000_000;

/// Storage-assigned identifier of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(i64);

impl PropertyId {
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

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Postal address of a property.
///
/// The full address is unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    /// Street name.
    pub street: String,
    /// House or building number; free text such as `"12B"`.
    pub number: String,
    /// Neighborhood or district.
    pub neighborhood: String,
    /// City.
    pub city: String,
    /// State or province code.
    pub state: String,
    /// Three-letter country code.
    pub country: String,
}

impl Address {
    /// Creates an address in the default country.
    ///
    /// Values are stored as given; [`PropertyBuilder::build`] trims and
    /// validates them.
    #[must_use]
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        neighborhood: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            number: number.into(),
            neighborhood: neighborhood.into(),
            city: city.into(),
            state: state.into(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }

    /// Overrides the country code.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    fn normalized(self) -> Result<Self> {
        Ok(Self {
            street: bounded_text("street", &self.street, 1, 160)?,
            number: bounded_text("number", &self.number, 1, 32)?,
            neighborhood: bounded_text("neighborhood", &self.neighborhood, 1, 120)?,
            city: bounded_text("city", &self.city, 1, 120)?,
            state: bounded_text("state", &self.state, 2, 8)?,
            country: bounded_text("country", &self.country, 3, 3)?,
        })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} - {}, {}/{} ({})",
            self.street, self.number, self.neighborhood, self.city, self.state, self.country
        )
    }
}

/// Trims `value` and checks its length in characters.
pub(crate) fn bounded_text(field: &str, value: &str, min: usize, max: usize) -> Result<String> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if len < min || len > max {
        let message = if min == max {
            format!("must be exactly {min} characters, got {len}")
        } else {
            format!("must be between {min} and {max} characters, got {len}")
        };
        return Err(Error::validation(field, message));
    }
    Ok(trimmed.to_string())
}

/// A property as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Identifier assigned on creation.
    pub id: PropertyId,
    /// Listing title.
    pub title: String,
    /// Postal address.
    pub address: Address,
    /// Number of rooms.
    pub rooms: u32,
    /// Maximum number of guests.
    pub capacity: u32,
    /// Price charged per night of stay.
    pub price_per_night: Money,
}

impl Property {
    /// Starts building a new property.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::{Address, Property};
    ///
    /// let address = Address::new("Rua das Flores", "10", "Centro", "Curitiba", "PR");
    /// let new_property = Property::builder("Loft", address, "120".parse().unwrap())
    ///     .rooms(2)
    ///     .capacity(4)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(new_property.capacity(), 4);
    /// assert_eq!(new_property.address().country, "BRA");
    /// ```
    #[must_use]
    pub fn builder(
        title: impl Into<String>,
        address: Address,
        price_per_night: Money,
    ) -> PropertyBuilder {
        PropertyBuilder {
            title: title.into(),
            address,
            rooms: 0,
            capacity: 0,
            price_per_night,
        }
    }
}

/// A validated property that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProperty {
    title: String,
    address: Address,
    rooms: u32,
    capacity: u32,
    price_per_night: Money,
}

impl NewProperty {
    /// Returns the listing title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the number of rooms.
    #[must_use]
    pub const fn rooms(&self) -> u32 {
        self.rooms
    }

    /// Returns the guest capacity.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the nightly price.
    #[must_use]
    pub const fn price_per_night(&self) -> Money {
        self.price_per_night
    }
}

/// Builder for [`NewProperty`].
#[derive(Debug)]
pub struct PropertyBuilder {
    title: String,
    address: Address,
    rooms: u32,
    capacity: u32,
    price_per_night: Money,
}

impl PropertyBuilder {
    /// Sets the number of rooms.
    #[must_use]
    pub const fn rooms(mut self, rooms: u32) -> Self {
        self.rooms = rooms;
        self
    }

    /// Sets the guest capacity.
    #[must_use]
    pub const fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Validates and builds the property.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a text field is empty or too long
    /// after trimming, or the price does not fit ten digits.
    pub fn build(self) -> Result<NewProperty> {
        let title = bounded_text("title", &self.title, 1, 160)?;
        let address = self.address.normalized()?;

        if self.price_per_night.to_minor_units() >= MAX_PRICE_CENTS {
            return Err(Error::validation(
                "price_per_night",
                "must be below 100000000.00",
            ));
        }

        Ok(NewProperty {
            title,
            address,
            rooms: self.rooms,
            capacity: self.capacity,
            price_per_night: self.price_per_night,
        })
    }
}

/// Optional criteria for listing properties. Absent criteria match all.
///
/// # Examples
///
/// ```
/// use innkeep::PropertyFilter;
///
/// let filter = PropertyFilter {
///     city: Some("curi".to_string()),
///     min_capacity: Some(4),
///     ..PropertyFilter::default()
/// };
/// assert!(!filter.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFilter {
    /// Substring of the neighborhood, case-insensitive.
    pub neighborhood: Option<String>,
    /// Substring of the city, case-insensitive.
    pub city: Option<String>,
    /// Substring of the state, case-insensitive.
    pub state: Option<String>,
    /// Minimum guest capacity.
    pub min_capacity: Option<u32>,
    /// Maximum nightly price.
    pub max_price: Option<Money>,
}

impl PropertyFilter {
    /// Returns true when no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        text_criterion(self.neighborhood.as_deref()).is_none()
            && text_criterion(self.city.as_deref()).is_none()
            && text_criterion(self.state.as_deref()).is_none()
            && self.min_capacity.is_none()
            && self.max_price.is_none()
    }

    /// Returns true when `property` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, property: &Property) -> bool {
        let address = &property.address;
        contains_ci(&address.neighborhood, self.neighborhood.as_deref())
            && contains_ci(&address.city, self.city.as_deref())
            && contains_ci(&address.state, self.state.as_deref())
            && self.min_capacity.map_or(true, |min| property.capacity >= min)
            && self
                .max_price
                .map_or(true, |max| property.price_per_night <= max)
    }
}

fn text_criterion(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match text_criterion(needle) {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}
