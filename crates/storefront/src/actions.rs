//! Cart actions.
//!
//! Each shopper action is a [`Command`]. Dispatching it makes at most one
//! cart store call and then returns the views that must be redrawn, so the
//! page never wires store calls to events directly.

use idos_core::LineItemId;
use tracing::instrument;

use crate::cart::input::{AddToCartForm, leading_integer};
use crate::error::{AppError, add_breadcrumb};
use crate::state::Storefront;
use crate::storage::KeyValueStore;
use crate::view::{BadgeView, CartView, Handoff};

/// A shopper action.
#[derive(Debug, Clone)]
pub enum Command {
    /// The page finished loading.
    PageLoaded,
    /// "Add to cart" pressed on a product card.
    AddToCart(AddToCartForm),
    /// A quantity field in the cart changed.
    UpdateQuantity { id: LineItemId, value: String },
    /// A line's remove button pressed.
    Remove { id: LineItemId },
    /// The cart modal is about to open.
    OpenCart,
    /// "Proceed to payment" pressed.
    Checkout,
}

impl Command {
    const fn name(&self) -> &'static str {
        match self {
            Self::PageLoaded => "page_loaded",
            Self::AddToCart(_) => "add_to_cart",
            Self::UpdateQuantity { .. } => "update_quantity",
            Self::Remove { .. } => "remove",
            Self::OpenCart => "open_cart",
            Self::Checkout => "checkout",
        }
    }
}

/// Confirmation toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
}

impl Toast {
    fn added(product_name: &str) -> Self {
        Self {
            message: format!("\"{product_name}\" se ha añadido al carrito."),
        }
    }
}

/// What the page must redraw after an action. `None` fields are left as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Refresh {
    pub badge: Option<BadgeView>,
    pub cart: Option<CartView>,
    pub toast: Option<Toast>,
    /// Present when checkout should close the cart and open payment.
    pub handoff: Option<Handoff>,
    /// Reset the product card's quantity field to 1.
    pub reset_quantity_input: bool,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Run one shopper action.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Input`] if the action's input is rejected (the
    /// cart is untouched) and [`AppError::Storage`] if the cart cannot be
    /// written.
    #[instrument(skip(self, command), fields(command = command.name()))]
    pub fn dispatch(&mut self, command: Command) -> Result<Refresh, AppError> {
        add_breadcrumb("cart", command.name(), None);

        let result = self.run(command);
        if let Err(e) = &result {
            e.report();
        }
        result
    }

    fn run(&mut self, command: Command) -> Result<Refresh, AppError> {
        match command {
            Command::PageLoaded => Ok(Refresh {
                badge: Some(self.views().refresh_badge()),
                ..Refresh::default()
            }),
            Command::AddToCart(form) => {
                let add = form.validate(self.config().currency)?;
                self.cart_mut().add_or_merge(
                    &add.product_id,
                    &add.variant,
                    &add.name,
                    add.price.amount,
                    add.quantity,
                )?;
                tracing::info!(product_id = %add.product_id, variant = %add.variant, "Added to cart");

                Ok(Refresh {
                    badge: Some(self.views().refresh_badge()),
                    toast: Some(Toast::added(&add.name)),
                    reset_quantity_input: true,
                    ..Refresh::default()
                })
            }
            Command::UpdateQuantity { id, value } => {
                // Input without leading digits counts as zero and removes the line.
                let quantity = leading_integer(&value).unwrap_or(0);
                if !self.cart_mut().set_quantity(&id, quantity)? {
                    return Ok(Refresh::default());
                }
                Ok(self.cart_refresh())
            }
            Command::Remove { id } => {
                self.cart_mut().remove(&id)?;
                Ok(self.cart_refresh())
            }
            Command::OpenCart => Ok(Refresh {
                cart: Some(self.views().refresh_itemized_view()),
                ..Refresh::default()
            }),
            Command::Checkout => Ok(Refresh {
                handoff: self.views().prepare_handoff(),
                ..Refresh::default()
            }),
        }
    }

    fn cart_refresh(&self) -> Refresh {
        let views = self.views();
        Refresh {
            badge: Some(views.refresh_badge()),
            cart: Some(views.refresh_itemized_view()),
            ..Refresh::default()
        }
    }
}
