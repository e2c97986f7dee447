//! Positive line item quantity.

use core::fmt;
use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The input is not an integer.
    #[error("quantity is not a whole number: {0}")]
    NotANumber(String),
    /// The input is zero or negative.
    #[error("quantity must be at least 1")]
    NotPositive,
    /// The input does not fit the quantity range.
    #[error("quantity is too large")]
    TooLarge,
}

/// A line item quantity, always at least 1.
///
/// A line with nothing in it is removed rather than kept at zero, so the
/// type cannot represent zero. Deserialization enforces the same rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A quantity of one.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// The largest representable quantity.
    pub const MAX: Self = Self(NonZeroU32::MAX);

    /// Create a quantity, returning `None` for zero.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Convert a signed value, as entered in a quantity field.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::NotPositive`] for zero or negative values and
    /// [`QuantityError::TooLarge`] above `u32::MAX`.
    pub fn from_signed(value: i64) -> Result<Self, QuantityError> {
        if value <= 0 {
            return Err(QuantityError::NotPositive);
        }
        let value = u32::try_from(value).map_err(|_| QuantityError::TooLarge)?;
        Self::new(value).ok_or(QuantityError::NotPositive)
    }

    /// Convert a signed value, clamping anything above `u32::MAX`.
    ///
    /// Returns `None` for zero or negative values.
    #[must_use]
    pub fn saturating_from_signed(value: i64) -> Option<Self> {
        match Self::from_signed(value) {
            Ok(quantity) => Some(quantity),
            Err(QuantityError::TooLarge) => Some(Self::MAX),
            Err(_) => None,
        }
    }

    /// Parse a quantity typed by the shopper.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not an integer or is not positive.
    pub fn parse(s: &str) -> Result<Self, QuantityError> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| QuantityError::NotANumber(trimmed.to_owned()))?;
        Self::from_signed(value)
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Add another quantity, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0.get()))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(QuantityError::NotPositive)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Quantity::parse("3").unwrap().get(), 3);
        assert_eq!(Quantity::parse(" 12 ").unwrap().get(), 12);
    }

    #[test]
    fn test_parse_rejects_zero_and_negative() {
        assert_eq!(Quantity::parse("0"), Err(QuantityError::NotPositive));
        assert_eq!(Quantity::parse("-4"), Err(QuantityError::NotPositive));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(matches!(
            Quantity::parse("dos"),
            Err(QuantityError::NotANumber(_))
        ));
        assert!(matches!(
            Quantity::parse(""),
            Err(QuantityError::NotANumber(_))
        ));
    }

    #[test]
    fn test_from_signed_too_large() {
        assert_eq!(
            Quantity::from_signed(i64::from(u32::MAX) + 1),
            Err(QuantityError::TooLarge)
        );
    }

    #[test]
    fn test_saturating_from_signed() {
        assert_eq!(Quantity::saturating_from_signed(7).unwrap().get(), 7);
        assert_eq!(Quantity::saturating_from_signed(5_000_000_000), Some(Quantity::MAX));
        assert_eq!(Quantity::saturating_from_signed(i64::MAX), Some(Quantity::MAX));
        assert_eq!(Quantity::saturating_from_signed(0), None);
        assert_eq!(Quantity::saturating_from_signed(-3), None);
    }

    #[test]
    fn test_deserialize_rejects_zero() {
        assert!(serde_json::from_str::<Quantity>("0").is_err());
        assert!(serde_json::from_str::<Quantity>("-1").is_err());
        assert_eq!(serde_json::from_str::<Quantity>("2").unwrap().get(), 2);
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Quantity::ONE).unwrap(), "1");
    }

    #[test]
    fn test_saturating_add() {
        let two = Quantity::new(2).unwrap();
        assert_eq!(two.saturating_add(Quantity::ONE).get(), 3);
        let max = Quantity::new(u32::MAX).unwrap();
        assert_eq!(max.saturating_add(two).get(), u32::MAX);
    }
}
