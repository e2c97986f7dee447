//! View synchronizer.
//!
//! Derives everything the page shows about the cart from the [`CartStore`]
//! on demand. Views are plain data plus askama fragments; nothing here is
//! kept between refreshes.

pub mod handoff;

pub use handoff::Handoff;

use askama::Template;
use idos_core::{CurrencyCode, LineItemId, Price};
use rust_decimal::Decimal;

use crate::cart::{CartStore, LineItem, total_of};
use crate::config::StorefrontConfig;
use crate::storage::KeyValueStore;

/// Cart count badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeView {
    pub count: u64,
}

impl BadgeView {
    /// The badge is hidden entirely when the cart is empty.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.count > 0
    }

    /// Render the badge fragment.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render(&self) -> askama::Result<String> {
        CartCountTemplate { count: self.count }.render()
    }
}

/// One row of the itemized cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: LineItemId,
    pub name: String,
    pub size: String,
    pub quantity: u32,
    /// Unit price, two decimals
    pub price: String,
    /// Price times quantity, two decimals
    pub line_price: String,
}

impl CartItemView {
    fn from_item(item: &LineItem, currency: CurrencyCode) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            size: item.size.clone(),
            quantity: item.quantity.get(),
            price: Price::new(item.price, currency).display(),
            line_price: Price::new(item.line_total(), currency).display(),
        }
    }
}

/// The itemized cart shown in the cart modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Grand total, two decimals
    pub total: String,
    pub checkout_enabled: bool,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty(currency: CurrencyCode) -> Self {
        Self {
            items: Vec::new(),
            total: Price::zero(currency).display(),
            checkout_enabled: false,
        }
    }

    /// Build the view from cart lines.
    #[must_use]
    pub fn from_items(items: &[LineItem], currency: CurrencyCode) -> Self {
        if items.is_empty() {
            return Self::empty(currency);
        }

        Self {
            items: items
                .iter()
                .map(|item| CartItemView::from_item(item, currency))
                .collect(),
            total: Price::new(total_of(items), currency).display(),
            checkout_enabled: true,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render the cart items fragment.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render(&self) -> askama::Result<String> {
        CartItemsTemplate { cart: self }.render()
    }
}

/// Cart items fragment template.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
struct CartItemsTemplate<'a> {
    cart: &'a CartView,
}

/// Cart count badge fragment template.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
struct CartCountTemplate {
    count: u64,
}

/// Derives views from the cart store.
pub struct ViewSynchronizer<'a, S> {
    store: &'a CartStore<S>,
    config: &'a StorefrontConfig,
}

impl<'a, S: KeyValueStore> ViewSynchronizer<'a, S> {
    pub const fn new(store: &'a CartStore<S>, config: &'a StorefrontConfig) -> Self {
        Self { store, config }
    }

    /// Badge showing the total item count.
    #[must_use]
    pub fn refresh_badge(&self) -> BadgeView {
        BadgeView {
            count: self.store.total_item_count(),
        }
    }

    /// Itemized rows, grand total and checkout availability.
    #[must_use]
    pub fn refresh_itemized_view(&self) -> CartView {
        CartView::from_items(&self.store.get_all(), self.config.currency)
    }

    /// Build the checkout hand-off, or `None` for an empty cart.
    #[must_use]
    pub fn prepare_handoff(&self) -> Option<Handoff> {
        let items = self.store.get_all();
        if items.is_empty() {
            return None;
        }
        Some(Handoff::build(&items, self.config))
    }

    /// Grand total at full precision.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.store.total_price()
    }
}
