//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty (after removing the currency symbol).
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("price is not a valid number: {0}")]
    Invalid(String),
    /// The amount is below zero.
    #[error("price cannot be negative")]
    Negative,
    /// The amount has more decimals than the currency's minor unit.
    #[error("price has more than {0} decimals")]
    TooPrecise(u32),
}

/// A unit price with currency information.
///
/// Amounts never carry more decimals than the currency's minor unit, so
/// they survive the cart's float encoding unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., soles, not céntimos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Parse a displayed price such as `"S/ 49.90"`.
    ///
    /// The currency symbol is optional, so `"49.90"` parses as well.
    ///
    /// # Errors
    ///
    /// Returns an error if the remaining text is empty or is not a valid
    /// amount (see [`Price::from_amount`]).
    ///
    /// ```
    /// use idos_core::{CurrencyCode, Price};
    /// use rust_decimal::Decimal;
    ///
    /// let price = Price::parse("S/ 49.90", CurrencyCode::PEN).unwrap();
    /// assert_eq!(price.amount, Decimal::new(4990, 2));
    /// ```
    pub fn parse(s: &str, currency_code: CurrencyCode) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        let number = trimmed
            .strip_prefix(currency_code.symbol())
            .unwrap_or(trimmed)
            .trim();

        if number.is_empty() {
            return Err(PriceError::Empty);
        }

        let amount =
            Decimal::from_str(number).map_err(|_| PriceError::Invalid(number.to_owned()))?;
        Self::from_amount(amount, currency_code)
    }

    /// Wrap an already-parsed amount.
    ///
    /// Trailing zeros are ignored, so `49.900` is accepted as `49.90`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero and
    /// [`PriceError::TooPrecise`] if it has more decimals than the
    /// currency's minor unit.
    pub fn from_amount(amount: Decimal, currency_code: CurrencyCode) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        let minor_units = currency_code.minor_units();
        if amount.normalize().scale() > minor_units {
            return Err(PriceError::TooPrecise(minor_units));
        }
        Ok(Self::new(amount, currency_code))
    }

    /// Format for display with two decimals (e.g., `"S/ 149.70"`).
    #[must_use]
    pub fn display(&self) -> String {
        let minor_units = self.currency_code.minor_units();
        let mut rounded = self
            .amount
            .round_dp_with_strategy(minor_units, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(minor_units);
        let symbol = self.currency_code.symbol();
        if self.currency_code.spaced_symbol() {
            format!("{symbol} {rounded}")
        } else {
            format!("{symbol}{rounded}")
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurrencyCode {
    /// Peruvian sol.
    #[default]
    PEN,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Currency symbol as shown on product cards.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::PEN => "S/",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// Number of decimals in the currency's minor unit.
    #[must_use]
    pub const fn minor_units(self) -> u32 {
        match self {
            Self::PEN | Self::USD | Self::EUR => 2,
        }
    }

    const fn spaced_symbol(self) -> bool {
        matches!(self, Self::PEN)
    }
}

impl FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PEN" => Ok(Self::PEN),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            other => Err(format!("unsupported currency: {other}")),
        }
    }
}
