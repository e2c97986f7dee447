//! Key-value storage substrate for the persisted cart.
//!
//! The cart is stored as one JSON string under a single key, the way a
//! browser's local storage holds it. Backends only need to get and set
//! whole string values.
//!
//! - [`MemoryStore`] - `HashMap`-backed, for tests and embedding
//! - [`FileStore`] - JSON object file on disk, used by the CLI

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing data exists but cannot be understood.
    #[error("Corrupt storage: {0}")]
    Corrupt(String),

    /// A value could not be serialized for storage.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A string key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Standard storage keys.
pub mod keys {
    /// Key holding the serialized cart.
    pub const CART: &str = "cart";
}
