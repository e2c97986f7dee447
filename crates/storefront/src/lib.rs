//! IDOS Storefront library.
//!
//! Cart logic for the IDOS shop page: a persisted cart store, views derived
//! from it, and the checkout hand-off, plus two small page helpers.
//!
//! # Modules
//!
//! - [`storage`] - Key-value substrate the cart is persisted in
//! - [`cart`] - Cart store and add-to-cart input validation
//! - [`view`] - Badge, itemized cart and checkout hand-off views
//! - [`actions`] - Shopper actions dispatched against a [`Storefront`]
//! - [`token`] - Unverified identity token decoding for debugging
//! - [`navbar`] - Navbar style from the scroll offset

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod actions;
pub mod cart;
pub mod config;
pub mod error;
pub mod navbar;
pub mod state;
pub mod storage;
pub mod token;
pub mod view;

pub use actions::{Command, Refresh, Toast};
pub use config::StorefrontConfig;
pub use error::AppError;
pub use state::Storefront;
