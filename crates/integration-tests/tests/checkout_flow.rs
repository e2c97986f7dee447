//! Shopper flows dispatched through the storefront.

use idos_core::LineItemId;
use idos_integration_tests::{add_command, storefront};
use idos_storefront::cart::input::{AddToCartForm, InputError, PriceInput};
use idos_storefront::storage::{FileStore, KeyValueStore};
use idos_storefront::view::BadgeView;
use idos_storefront::{AppError, Command, Storefront, StorefrontConfig};
use rust_decimal::Decimal;

#[test]
fn test_empty_cart_state() {
    let mut sf = storefront();

    let badge = sf
        .dispatch(Command::PageLoaded)
        .expect("page loaded")
        .badge
        .expect("badge");
    assert!(!badge.is_visible());

    let cart = sf
        .dispatch(Command::OpenCart)
        .expect("open cart")
        .cart
        .expect("cart view");
    assert!(cart.is_empty());
    assert!(!cart.checkout_enabled);
    assert!(
        cart.render()
            .expect("render")
            .contains("Tu carrito está vacío.")
    );

    let refresh = sf.dispatch(Command::Checkout).expect("checkout");
    assert!(refresh.handoff.is_none());
}

#[test]
fn test_full_flow_to_handoff() {
    let mut sf = storefront();
    sf.dispatch(add_command("P1", "M", "Shirt", "S/ 49.90", "2"))
        .expect("add");
    sf.dispatch(add_command("P1", "M", "Shirt", "S/ 49.90", "1"))
        .expect("add");
    sf.dispatch(add_command("P9", "L", "Casaca", "S/ 120.00", "1"))
        .expect("add");

    let refresh = sf
        .dispatch(Command::UpdateQuantity {
            id: LineItemId::new("P9-L"),
            value: "2".to_string(),
        })
        .expect("update");
    assert_eq!(refresh.badge, Some(BadgeView { count: 5 }));
    let cart = refresh.cart.expect("cart view");
    assert_eq!(cart.total, "S/ 389.70");
    assert!(cart.checkout_enabled);

    let handoff = sf
        .dispatch(Command::Checkout)
        .expect("checkout")
        .handoff
        .expect("handoff");
    assert_eq!(handoff.total, Decimal::new(38970, 2));
    assert_eq!(handoff.total_label, "Total a Pagar: S/ 389.70");
    assert!(
        handoff
            .message
            .contains("3x Shirt (Talla: M)\n2x Casaca (Talla: L)")
    );
    assert!(handoff.link.starts_with("https://wa.me/51916796360?text="));
}

#[test]
fn test_rejections_do_not_mutate() {
    let mut sf = storefront();
    sf.dispatch(add_command("P1", "M", "Shirt", "S/ 49.90", "1"))
        .expect("add");
    let before = sf.cart().storage().get("cart").expect("read");

    let no_size = Command::AddToCart(AddToCartForm {
        product_id: "P1".to_string(),
        name: "Shirt".to_string(),
        variant: None,
        quantity: "1".to_string(),
        price: Some(PriceInput::from("S/ 49.90")),
    });
    let err = sf.dispatch(no_size).expect_err("no size");
    assert!(matches!(err, AppError::Input(InputError::MissingVariant)));

    let err = sf
        .dispatch(add_command("P1", "M", "Shirt", "S/ 49.90", "cero"))
        .expect_err("bad quantity");
    assert_eq!(err.user_message(), "Por favor, selecciona una cantidad válida.");

    let err = sf
        .dispatch(add_command("P1", "M", "Shirt", "precio", "1"))
        .expect_err("bad price");
    assert!(matches!(err, AppError::Input(InputError::Price(_))));

    assert_eq!(sf.cart().storage().get("cart").expect("read"), before);
}

#[test]
fn test_file_backed_storefront_survives_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = StorefrontConfig {
        storage_path: dir.path().join("local_storage.json"),
        ..StorefrontConfig::default()
    };

    let mut sf = Storefront::new(config.clone(), FileStore::new(config.storage_path.clone()));
    sf.dispatch(add_command("P1", "M", "Shirt", "S/ 49.90", "2"))
        .expect("add");
    drop(sf);

    let mut sf = Storefront::new(config.clone(), FileStore::new(config.storage_path.clone()));
    let refresh = sf.dispatch(Command::PageLoaded).expect("page loaded");
    assert_eq!(refresh.badge, Some(BadgeView { count: 2 }));

    sf.dispatch(Command::Remove {
        id: LineItemId::new("P1-M"),
    })
    .expect("remove");
    let raw: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(&config.storage_path).expect("read file"),
    )
    .expect("json");
    assert_eq!(raw.get("cart").and_then(|v| v.as_str()), Some("[]"));
}
