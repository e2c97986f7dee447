//! Checkout hand-off to the store's messaging link.
//!
//! Payment is confirmed manually: the shopper pays by Yape and sends the
//! order summary through a pre-filled WhatsApp message. No response is
//! awaited.

use rust_decimal::Decimal;

use idos_core::Price;

use crate::cart::{LineItem, total_of};
use crate::config::{HandoffConfig, StorefrontConfig};

/// A prepared checkout hand-off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    /// Grand total at full precision
    pub total: Decimal,
    /// Label for the payment modal, e.g. `"Total a Pagar: S/ 149.70"`
    pub total_label: String,
    /// Plain-text message before encoding
    pub message: String,
    /// Link with the encoded message as its `text` parameter
    pub link: String,
}

impl Handoff {
    /// Build the hand-off for a non-empty cart.
    #[must_use]
    pub fn build(items: &[LineItem], config: &StorefrontConfig) -> Self {
        let total = total_of(items);
        let total_display = Price::new(total, config.currency).display();
        let message = order_message(&config.store_name, &total_display, items);
        let link = handoff_link(&config.handoff, &message);

        Self {
            total,
            total_label: format!("Total a Pagar: {total_display}"),
            message,
            link,
        }
    }
}

/// One summary line per cart line: `"2x Shirt (Talla: M)"`.
#[must_use]
pub fn order_lines(items: &[LineItem]) -> String {
    items
        .iter()
        .map(|item| format!("{}x {} (Talla: {})", item.quantity, item.name, item.size))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The fixed order message with the formatted total and summary lines.
#[must_use]
pub fn order_message(store_name: &str, total_display: &str, items: &[LineItem]) -> String {
    format!(
        "¡Hola {store_name}! 👋 Quisiera comprar los siguientes productos por un total de {total_display}:\n\n{}\n\nAdjuntaré mi constancia de pago Yape. ¡Gracias!",
        order_lines(items)
    )
}

/// `https://wa.me/<phone>?text=<percent-encoded message>`
#[must_use]
pub fn handoff_link(config: &HandoffConfig, message: &str) -> String {
    let base = config.base_url.as_str().trim_end_matches('/');
    format!(
        "{base}/{}?text={}",
        config.phone,
        urlencoding::encode(message)
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use idos_core::{LineItemId, Quantity};

    use super::*;

    fn items() -> Vec<LineItem> {
        vec![
            LineItem {
                id: LineItemId::new("P1-M"),
                name: "Shirt".to_string(),
                price: Decimal::new(4990, 2),
                quantity: Quantity::new(3).unwrap(),
                size: "M".to_string(),
            },
            LineItem {
                id: LineItemId::new("P2-S"),
                name: "Cap".to_string(),
                price: Decimal::new(20, 0),
                quantity: Quantity::ONE,
                size: "S".to_string(),
            },
        ]
    }

    #[test]
    fn test_order_lines() {
        assert_eq!(
            order_lines(&items()),
            "3x Shirt (Talla: M)\n1x Cap (Talla: S)"
        );
    }

    #[test]
    fn test_build() {
        let handoff = Handoff::build(&items(), &StorefrontConfig::default());
        assert_eq!(handoff.total, Decimal::new(16970, 2));
        assert_eq!(handoff.total_label, "Total a Pagar: S/ 169.70");
        assert!(handoff.message.starts_with("¡Hola IDOS! 👋"));
        assert!(handoff.message.contains("por un total de S/ 169.70:\n\n3x Shirt"));
        assert!(handoff.message.ends_with("¡Gracias!"));
    }

    #[test]
    fn test_link_is_percent_encoded() {
        let handoff = Handoff::build(&items(), &StorefrontConfig::default());
        assert!(
            handoff
                .link
                .starts_with("https://wa.me/51916796360?text=%C2%A1Hola%20IDOS%21")
        );
        assert!(!handoff.link.contains(' '));
        assert!(!handoff.link.contains('\n'));

        let (_, encoded) = handoff.link.split_once("?text=").unwrap();
        assert_eq!(urlencoding::decode(encoded).unwrap(), handoff.message);
    }
}
