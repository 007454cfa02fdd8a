//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A product price.
///
/// The backend sends `precio` as a JSON number, so floating-point binary
/// representation is what the wire carries; `Decimal` keeps arithmetic and
/// display exact on our side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

// The wire format is a bare JSON number, not rust_decimal's default string.
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_number() {
        let price: Price = serde_json::from_str("19.99").unwrap();
        assert_eq!(price.to_string(), "19.99");
    }

    #[test]
    fn test_serialize_as_number() {
        let price = Price::new(Decimal::new(2500, 2));
        assert_eq!(serde_json::to_string(&price).unwrap(), "25.0");
    }

    #[test]
    fn test_display_two_decimals() {
        let price = Price::new(Decimal::new(5, 0));
        assert_eq!(price.to_string(), "5.00");
    }
}
