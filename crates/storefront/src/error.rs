//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type returned by action dispatch. Storage
//! failures are captured to Sentry; input rejections are expected and only
//! produce a message for the shopper.

use thiserror::Error;

use crate::cart::input::InputError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// The cart could not be persisted.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The shopper's input was rejected.
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),
}

impl AppError {
    /// Whether this error indicates a fault rather than bad input.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Message shown to the shopper.
    ///
    /// Internal details are never exposed.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Storage(_) => "No se pudo guardar el carrito. Inténtalo de nuevo.".to_string(),
            Self::Input(err) => err.user_message().to_string(),
        }
    }

    /// Log the error and capture internal errors to Sentry.
    pub fn report(&self) {
        if self.is_internal() {
            let event_id = sentry::capture_error(self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Cart action failed"
            );
        } else {
            tracing::info!(error = %self, "Cart action rejected");
        }
    }
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added to cart", Some(&[("item_id", "P1-M")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Input(InputError::MissingVariant);
        assert_eq!(err.to_string(), "Invalid input: no size selected");

        let err = AppError::Storage(StorageError::Corrupt("bad".to_string()));
        assert_eq!(err.to_string(), "Storage error: Corrupt storage: bad");
    }

    #[test]
    fn test_user_message_hides_internal_details() {
        let err = AppError::Storage(StorageError::Corrupt("/home/ana/.idos".to_string()));
        assert!(err.is_internal());
        assert!(!err.user_message().contains("/home/ana"));

        let err = AppError::Input(InputError::MissingPrice);
        assert!(!err.is_internal());
        assert_eq!(
            err.user_message(),
            "Error: No se pudo obtener el precio del producto."
        );
    }
}
