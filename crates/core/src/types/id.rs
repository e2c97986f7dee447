//! Newtype IDs for type-safe cart references.
//!
//! Use the `define_string_id!` macro to create ID wrappers that prevent
//! accidentally mixing a product ID with a line item ID.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use idos_core::define_string_id;
/// define_string_id!(SkuId);
///
/// let sku = SkuId::new("polo-negro");
/// assert_eq!(sku.as_str(), "polo-negro");
/// ```
#[macro_export]
macro_rules! define_string_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_string_id!(ProductId);
define_string_id!(LineItemId);

impl LineItemId {
    /// Separator between the product ID and the variant label.
    pub const SEPARATOR: char = '-';

    /// Compose the line item key for a (product, variant) pair.
    ///
    /// The same pair always yields the same key, so adding a product twice
    /// in the same size merges into one line.
    ///
    /// ```
    /// use idos_core::{LineItemId, ProductId};
    ///
    /// let id = LineItemId::compose(&ProductId::new("P1"), "M");
    /// assert_eq!(id.as_str(), "P1-M");
    /// ```
    #[must_use]
    pub fn compose(product_id: &ProductId, variant_label: &str) -> Self {
        Self(format!("{product_id}{}{variant_label}", Self::SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_joins_with_dash() {
        let id = LineItemId::compose(&ProductId::new("polo-01"), "XL");
        assert_eq!(id.as_str(), "polo-01-XL");
    }

    #[test]
    fn test_compose_is_deterministic() {
        let product = ProductId::new("P1");
        assert_eq!(
            LineItemId::compose(&product, "M"),
            LineItemId::compose(&product, "M")
        );
        assert_ne!(
            LineItemId::compose(&product, "M"),
            LineItemId::compose(&product, "L")
        );
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = LineItemId::new("P1-M");
        assert_eq!(serde_json::to_string(&id).ok().as_deref(), Some("\"P1-M\""));
    }

    #[test]
    fn test_display() {
        let id = ProductId::from("P9");
        assert_eq!(format!("{id}"), "P9");
    }
}
