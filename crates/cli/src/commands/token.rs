//! Identity token debugging command.

use idos_storefront::token::decode_claims;

use super::{CommandError, output};

/// Decode a token's claims and print them as JSON.
///
/// # Errors
///
/// Returns an error if the token cannot be decoded.
pub fn decode(token: &str) -> Result<(), CommandError> {
    tracing::warn!("Token signature is not verified; do not trust these claims");
    let claims = decode_claims(token)?;
    output::line(&serde_json::to_string_pretty(&claims)?);
    output::line(&claims.sign_in_message());
    Ok(())
}
