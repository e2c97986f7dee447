//! Storefront state: configuration plus the cart store.

use crate::cart::CartStore;
use crate::config::StorefrontConfig;
use crate::storage::KeyValueStore;
use crate::view::ViewSynchronizer;

/// Everything an action needs: configuration and the cart over an
/// injected storage backend.
pub struct Storefront<S> {
    config: StorefrontConfig,
    cart: CartStore<S>,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Create the storefront over `storage`, keyed by `config.storage_key`.
    pub fn new(config: StorefrontConfig, storage: S) -> Self {
        let cart = CartStore::with_key(storage, config.storage_key.clone());
        Self { config, cart }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    /// Get a mutable reference to the cart store.
    pub const fn cart_mut(&mut self) -> &mut CartStore<S> {
        &mut self.cart
    }

    /// Views derived from the current cart.
    #[must_use]
    pub const fn views(&self) -> ViewSynchronizer<'_, S> {
        ViewSynchronizer::new(&self.cart, &self.config)
    }

    /// Consume the storefront and return the underlying storage.
    pub fn into_storage(self) -> S {
        self.cart.into_storage()
    }
}
