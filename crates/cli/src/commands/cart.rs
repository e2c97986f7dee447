//! Cart commands over the file-backed store.

use idos_core::LineItemId;
use idos_storefront::cart::input::{AddToCartForm, PriceInput};
use idos_storefront::storage::FileStore;
use idos_storefront::view::CartView;
use idos_storefront::{Command, Refresh, Storefront, StorefrontConfig};

use super::{CommandError, output};

/// Open the storefront over the configured storage file.
pub fn open(config: StorefrontConfig) -> Storefront<FileStore> {
    let storage = FileStore::new(config.storage_path.clone());
    tracing::debug!(path = %storage.path().display(), "Opened cart storage");
    Storefront::new(config, storage)
}

/// Add a product variant.
///
/// # Errors
///
/// Returns an error if the input is rejected or the cart cannot be saved.
pub fn add(
    storefront: &mut Storefront<FileStore>,
    product_id: String,
    name: String,
    size: Option<String>,
    price: Option<String>,
    quantity: String,
) -> Result<(), CommandError> {
    let form = AddToCartForm {
        product_id,
        name,
        variant: size,
        quantity,
        price: price.map(PriceInput::Display),
    };
    let refresh = storefront.dispatch(Command::AddToCart(form))?;
    print_refresh(&refresh);
    Ok(())
}

/// Set the quantity of a line.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn update(
    storefront: &mut Storefront<FileStore>,
    id: &str,
    quantity: String,
) -> Result<(), CommandError> {
    let refresh = storefront.dispatch(Command::UpdateQuantity {
        id: LineItemId::new(id),
        value: quantity,
    })?;
    if refresh == Refresh::default() {
        output::line(&format!("No line with id {id}"));
    }
    print_refresh(&refresh);
    Ok(())
}

/// Remove a line.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn remove(storefront: &mut Storefront<FileStore>, id: &str) -> Result<(), CommandError> {
    let refresh = storefront.dispatch(Command::Remove {
        id: LineItemId::new(id),
    })?;
    print_refresh(&refresh);
    Ok(())
}

/// Show the cart.
///
/// # Errors
///
/// Returns an error if a fragment fails to render.
pub fn show(storefront: &Storefront<FileStore>, html: bool) -> Result<(), CommandError> {
    let views = storefront.views();
    let badge = views.refresh_badge();
    let cart = views.refresh_itemized_view();

    if html {
        output::line(&badge.render()?);
        output::line(&cart.render()?);
    } else {
        print_cart(&cart);
    }
    Ok(())
}

/// Print the checkout hand-off.
///
/// # Errors
///
/// Returns an error if the dispatch fails.
pub fn checkout(storefront: &mut Storefront<FileStore>) -> Result<(), CommandError> {
    match storefront.dispatch(Command::Checkout)?.handoff {
        Some(handoff) => {
            output::line(&handoff.total_label);
            output::line("");
            output::line(&handoff.message);
            output::line("");
            output::line(&handoff.link);
        }
        None => output::line("Tu carrito está vacío."),
    }
    Ok(())
}

fn print_refresh(refresh: &Refresh) {
    if let Some(toast) = &refresh.toast {
        output::line(&toast.message);
    }
    if let Some(cart) = &refresh.cart {
        print_cart(cart);
    }
    if let Some(badge) = refresh.badge.filter(|badge| badge.is_visible()) {
        output::line(&format!("Artículos en el carrito: {}", badge.count));
    }
}

fn print_cart(cart: &CartView) {
    if cart.is_empty() {
        output::line("Tu carrito está vacío.");
        return;
    }

    for item in &cart.items {
        output::line(&format!(
            "{:<16} {:>3} x {:<16} {:<6} {:>12}",
            item.id.as_str(),
            item.quantity,
            item.name,
            item.size,
            item.line_price
        ));
    }
    output::line(&format!("Total: {}", cart.total));
}
