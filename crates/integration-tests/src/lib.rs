//! Integration tests for the IDOS cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p idos-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - Cart store properties over memory and file storage
//! - `checkout_flow` - Shopper actions from page load to hand-off
//!
//! This library holds the shared fixtures.

use idos_storefront::cart::input::{AddToCartForm, PriceInput};
use idos_storefront::storage::MemoryStore;
use idos_storefront::{Command, Storefront, StorefrontConfig};
use rust_decimal::Decimal;

/// A storefront with default configuration over empty memory storage.
#[must_use]
pub fn storefront() -> Storefront<MemoryStore> {
    Storefront::new(StorefrontConfig::default(), MemoryStore::new())
}

/// The 49.90 shirt used across scenarios.
#[must_use]
pub fn shirt_price() -> Decimal {
    Decimal::new(4990, 2)
}

/// An add-to-cart command as a product card would send it.
#[must_use]
pub fn add_command(product_id: &str, size: &str, name: &str, price: &str, quantity: &str) -> Command {
    Command::AddToCart(AddToCartForm {
        product_id: product_id.to_string(),
        name: name.to_string(),
        variant: Some(size.to_string()),
        quantity: quantity.to_string(),
        price: Some(PriceInput::from(price)),
    })
}
