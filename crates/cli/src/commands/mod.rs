//! CLI command implementations.

pub mod cart;
pub mod navbar;
pub mod output;
pub mod token;

use idos_storefront::AppError;
use idos_storefront::token::TokenError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A cart action failed or was rejected.
    #[error(transparent)]
    App(#[from] AppError),

    /// A template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// The token could not be decoded.
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    /// Message shown on the terminal.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::App(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}
