//! Identity token decoding for local debugging.
//!
//! Decodes the claims segment of a compact `header.payload.signature`
//! token so they can be displayed. The signature is NOT verified, so the
//! result must never be used to authenticate anyone; verification belongs
//! on a server.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while decoding a token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token is not three dot-separated segments.
    #[error("token must have 3 segments, found {0}")]
    Malformed(usize),

    /// The payload segment is not base64url.
    #[error("payload is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The payload is not a JSON object.
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Claims carried by an identity token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdTokenClaims {
    pub sub: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
    /// Any other claims (`iss`, `aud`, `exp`, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl IdTokenClaims {
    /// Sign-in confirmation shown after decoding.
    #[must_use]
    pub fn sign_in_message(&self) -> String {
        let who = self
            .email
            .as_deref()
            .or(self.name.as_deref())
            .or(self.sub.as_deref())
            .unwrap_or("usuario desconocido");
        format!("¡Inicio de sesión o registro con Google exitoso para: {who}!")
    }
}

/// Decode the claims of a compact token without verifying it.
///
/// # Errors
///
/// Returns a [`TokenError`] if the token is not three segments or its
/// payload is not base64url-encoded JSON.
pub fn decode_claims(token: &str) -> Result<IdTokenClaims, TokenError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(TokenError::Malformed(segments.len()));
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    let claims = serde_json::from_slice(&bytes)?;
    tracing::debug!("Decoded identity token claims (unverified)");
    Ok(claims)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn token_for(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_decode_claims() {
        let token = token_for(
            r#"{"sub":"1234","email":"ana@example.com","name":"Ana Quispe","iss":"https://accounts.google.com"}"#,
        );
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("1234"));
        assert_eq!(claims.email.as_deref(), Some("ana@example.com"));
        assert_eq!(
            claims.extra.get("iss").and_then(|v| v.as_str()),
            Some("https://accounts.google.com")
        );
        assert_eq!(
            claims.sign_in_message(),
            "¡Inicio de sesión o registro con Google exitoso para: ana@example.com!"
        );
    }

    #[test]
    fn test_decode_non_ascii_claims() {
        let token = token_for(r#"{"name":"José Muñoz"}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.name.as_deref(), Some("José Muñoz"));
    }

    #[test]
    fn test_padded_payload() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"sub":"1"}"#);
        let token = format!("h.{payload}.s");
        assert_eq!(decode_claims(&token).unwrap().sub.as_deref(), Some("1"));
    }

    #[test]
    fn test_wrong_segment_count() {
        assert!(matches!(decode_claims("a.b"), Err(TokenError::Malformed(2))));
        assert!(matches!(
            decode_claims("a.b.c.d"),
            Err(TokenError::Malformed(4))
        ));
    }

    #[test]
    fn test_bad_base64() {
        assert!(matches!(decode_claims("a.@@@.c"), Err(TokenError::Base64(_))));
    }

    #[test]
    fn test_bad_json() {
        let token = format!("a.{}.c", URL_SAFE_NO_PAD.encode("not json"));
        assert!(matches!(decode_claims(&token), Err(TokenError::Json(_))));
    }
}
