//! Core types for IDOS.
//!
//! This module provides type-safe wrappers for common cart concepts.

pub mod id;
pub mod price;
pub mod quantity;

pub use id::{LineItemId, ProductId};
pub use price::{CurrencyCode, Price, PriceError};
pub use quantity::{Quantity, QuantityError};
