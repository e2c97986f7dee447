//! Validation of "add to cart" input coming from a product card.
//!
//! Checks run in the order the product card is read: price, then size,
//! then quantity. A rejected form never touches the cart.

use idos_core::{CurrencyCode, Price, PriceError, ProductId, Quantity, QuantityError};
use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons an add-to-cart request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The product card has no price.
    #[error("product price is missing")]
    MissingPrice,

    /// The price could not be read.
    #[error("invalid price: {0}")]
    Price(#[from] PriceError),

    /// No size was selected.
    #[error("no size selected")]
    MissingVariant,

    /// The quantity field is not a positive whole number.
    #[error("invalid quantity: {0}")]
    Quantity(#[from] QuantityError),
}

impl InputError {
    /// Message shown to the shopper.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::MissingPrice | Self::Price(_) => {
                "Error: No se pudo obtener el precio del producto."
            }
            Self::MissingVariant => "Por favor, selecciona una talla antes de añadir al carrito.",
            Self::Quantity(_) => "Por favor, selecciona una cantidad válida.",
        }
    }
}

/// Price as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceInput {
    /// Already-parsed amount.
    Amount(Decimal),
    /// Text as displayed on the card, e.g. `"S/ 49.90"`.
    Display(String),
}

impl From<Decimal> for PriceInput {
    fn from(amount: Decimal) -> Self {
        Self::Amount(amount)
    }
}

impl From<&str> for PriceInput {
    fn from(text: &str) -> Self {
        Self::Display(text.to_owned())
    }
}

/// Raw add-to-cart input.
#[derive(Debug, Clone)]
pub struct AddToCartForm {
    pub product_id: String,
    pub name: String,
    /// Label of the selected size option, `None` if nothing is selected.
    pub variant: Option<String>,
    /// Content of the quantity field.
    pub quantity: String,
    pub price: Option<PriceInput>,
}

/// An add-to-cart request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAdd {
    pub product_id: ProductId,
    pub variant: String,
    pub name: String,
    pub price: Price,
    pub quantity: Quantity,
}

impl AddToCartForm {
    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] found.
    pub fn validate(&self, currency: CurrencyCode) -> Result<ValidatedAdd, InputError> {
        let price = match &self.price {
            None => return Err(InputError::MissingPrice),
            Some(PriceInput::Amount(amount)) => Price::from_amount(*amount, currency)?,
            Some(PriceInput::Display(text)) => Price::parse(text, currency)?,
        };

        let variant = self
            .variant
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .ok_or(InputError::MissingVariant)?;

        let quantity = Quantity::parse(&self.quantity)?;

        Ok(ValidatedAdd {
            product_id: ProductId::new(self.product_id.trim()),
            variant: variant.to_owned(),
            name: self.name.trim().to_owned(),
            price,
            quantity,
        })
    }
}

/// Read the integer a cart quantity field starts with.
///
/// Leading whitespace and one sign are accepted, and reading stops at the
/// first non-digit, so `"2.5"` and `"2abc"` both read as 2. Returns `None`
/// when there are no digits. Values beyond the `i64` range are clamped.
#[must_use]
pub fn leading_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = rest.get(..end).filter(|digits| !digits.is_empty())?;

    // Only overflow can fail on a run of ASCII digits.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form() -> AddToCartForm {
        AddToCartForm {
            product_id: "P1".to_string(),
            name: "Shirt".to_string(),
            variant: Some("M".to_string()),
            quantity: "2".to_string(),
            price: Some(PriceInput::from("S/ 49.90")),
        }
    }

    #[test]
    fn test_valid_form() {
        let add = form().validate(CurrencyCode::PEN).unwrap();
        assert_eq!(add.product_id.as_str(), "P1");
        assert_eq!(add.variant, "M");
        assert_eq!(add.quantity.get(), 2);
        assert_eq!(add.price.amount, Decimal::new(4990, 2));
    }

    #[test]
    fn test_pre_parsed_amount() {
        let mut f = form();
        f.price = Some(PriceInput::from(Decimal::new(1050, 2)));
        let add = f.validate(CurrencyCode::PEN).unwrap();
        assert_eq!(add.price.amount, Decimal::new(1050, 2));
    }

    #[test]
    fn test_missing_price_checked_first() {
        let mut f = form();
        f.price = None;
        f.variant = None;
        assert_eq!(f.validate(CurrencyCode::PEN), Err(InputError::MissingPrice));
    }

    #[test]
    fn test_missing_variant() {
        let mut f = form();
        f.variant = Some("  ".to_string());
        let err = f.validate(CurrencyCode::PEN).unwrap_err();
        assert_eq!(err, InputError::MissingVariant);
        assert_eq!(
            err.user_message(),
            "Por favor, selecciona una talla antes de añadir al carrito."
        );
    }

    #[test]
    fn test_bad_quantity() {
        for bad in ["0", "-3", "abc", ""] {
            let mut f = form();
            f.quantity = bad.to_string();
            assert!(
                matches!(f.validate(CurrencyCode::PEN), Err(InputError::Quantity(_))),
                "quantity {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut f = form();
        f.price = Some(PriceInput::from(Decimal::new(-1, 0)));
        assert_eq!(
            f.validate(CurrencyCode::PEN),
            Err(InputError::Price(PriceError::Negative))
        );
    }

    #[test]
    fn test_sub_cent_price_rejected() {
        let mut f = form();
        f.price = Some(PriceInput::from("S/ 49.999"));
        let err = f.validate(CurrencyCode::PEN).unwrap_err();
        assert_eq!(err, InputError::Price(PriceError::TooPrecise(2)));
        assert_eq!(
            err.user_message(),
            "Error: No se pudo obtener el precio del producto."
        );
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("3"), Some(3));
        assert_eq!(leading_integer(" 2.5"), Some(2));
        assert_eq!(leading_integer("2abc"), Some(2));
        assert_eq!(leading_integer("-1"), Some(-1));
        assert_eq!(leading_integer("+4"), Some(4));
        assert_eq!(leading_integer("99999999999999999999"), Some(i64::MAX));
        assert_eq!(leading_integer("-99999999999999999999"), Some(-i64::MAX));
    }

    #[test]
    fn test_leading_integer_without_digits() {
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer(".5"), None);
    }
}
