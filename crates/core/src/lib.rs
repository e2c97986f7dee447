//! IDOS Core - Shared cart types.
//!
//! This crate provides the value types used across all IDOS components:
//! - `storefront` - Cart store, view synchronizer and action dispatch
//! - `cli` - Command-line driver over a file-backed store
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no storage
//! access, no rendering. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for line item IDs, prices and quantities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
