//! Cart store.
//!
//! The cart is a list of line items keyed by `product-variant`. Every
//! operation loads the whole cart from storage, changes it in memory and
//! writes the whole cart back. Nothing is cached between calls, so another
//! writer to the same key is always observed (last write wins).

pub mod input;

use idos_core::{LineItemId, ProductId, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::storage::{KeyValueStore, StorageError, keys};

/// One row in the cart.
///
/// `name`, `price` and `size` are captured when the line is first added and
/// are not refreshed by later merges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    pub name: String,
    #[serde(with = "float_price")]
    pub price: Decimal,
    pub quantity: Quantity,
    pub size: String,
}

impl LineItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price
            .saturating_mul(Decimal::from(self.quantity.get()))
    }
}

/// The persisted cart, read and written as a whole.
pub struct CartStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a store over `storage` using the default `"cart"` key.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, keys::CART)
    }

    /// Create a store over `storage` using a custom key.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// The storage key holding the cart.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the underlying storage.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store and return the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Add `quantity` of a product variant, merging into an existing line.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be written back.
    #[instrument(skip(self, name, price), fields(key = %self.key))]
    pub fn add_or_merge(
        &mut self,
        product_id: &ProductId,
        variant_label: &str,
        name: &str,
        price: Decimal,
        quantity: Quantity,
    ) -> Result<(), StorageError> {
        let id = LineItemId::compose(product_id, variant_label);
        let mut items = self.load();

        if let Some(item) = items.iter_mut().find(|item| item.id == id) {
            item.quantity = item.quantity.saturating_add(quantity);
            debug!(%id, quantity = %item.quantity, "Merged into existing line");
        } else {
            debug!(%id, %quantity, "Appended new line");
            items.push(LineItem {
                id,
                name: name.to_owned(),
                price,
                quantity,
                size: variant_label.to_owned(),
            });
        }

        self.save(&items)
    }

    /// Set the quantity of a line. Zero or below removes it; values above
    /// the quantity range are clamped.
    ///
    /// Returns `true` if the line existed. Unknown ids leave storage
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be written back.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn set_quantity(
        &mut self,
        id: &LineItemId,
        new_quantity: i64,
    ) -> Result<bool, StorageError> {
        let mut items = self.load();
        let Some(index) = items.iter().position(|item| &item.id == id) else {
            return Ok(false);
        };

        match Quantity::saturating_from_signed(new_quantity) {
            Some(quantity) => {
                if let Some(item) = items.get_mut(index) {
                    item.quantity = quantity;
                }
            }
            None => {
                items.remove(index);
                debug!(%id, "Removed line with non-positive quantity");
            }
        }

        self.save(&items)?;
        Ok(true)
    }

    /// Remove a line if present. Always writes the cart back.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be written back.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn remove(&mut self, id: &LineItemId) -> Result<(), StorageError> {
        let mut items = self.load();
        items.retain(|item| &item.id != id);
        self.save(&items)
    }

    /// An owned copy of the current lines, in cart order.
    #[must_use]
    pub fn get_all(&self) -> Vec<LineItem> {
        self.load()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.load()
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Sum of `price * quantity` across all lines, unrounded.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        total_of(&self.load())
    }

    /// Load the cart, treating missing or unreadable data as empty.
    fn load(&self) -> Vec<LineItem> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Cart storage unreadable, using empty cart");
                return Vec::new();
            }
        };

        // A stored `null` is an empty cart.
        match serde_json::from_str::<Option<Vec<LineItem>>>(&raw) {
            Ok(items) => items.unwrap_or_default(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Malformed cart data, using empty cart");
                Vec::new()
            }
        }
    }

    fn save(&mut self, items: &[LineItem]) -> Result<(), StorageError> {
        let body = serde_json::to_string(items)?;
        self.storage.set(&self.key, &body)
    }
}

/// Prices are stored as JSON numbers, as the page script writes them.
///
/// Serialization fails for a price the float cannot carry exactly, so a
/// reload always yields the price that was added.
mod float_price {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::ToPrimitive;
    use serde::{Deserializer, Serializer, ser::Error as _};

    pub fn serialize<S: Serializer>(price: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        // Reading uses the shortest decimal form of the float.
        let float = price
            .to_f64()
            .filter(|float| float.to_string().parse::<Decimal>().ok() == Some(*price))
            .ok_or_else(|| S::Error::custom(format!("price {price} has no exact float form")))?;
        serializer.serialize_f64(float)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer)
    }
}

/// Sum of line totals.
#[must_use]
pub fn total_of(items: &[LineItem]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |sum, item| sum.saturating_add(item.line_total()))
}
