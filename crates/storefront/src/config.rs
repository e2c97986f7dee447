//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `IDOS_STORAGE_KEY` - Storage key holding the cart (default: cart)
//! - `IDOS_STORAGE_PATH` - File used by the file-backed store
//!   (default: .idos/local_storage.json)
//! - `IDOS_CURRENCY` - ISO currency code for prices (default: PEN)
//! - `IDOS_STORE_NAME` - Store name used in the checkout message (default: IDOS)
//! - `IDOS_HANDOFF_BASE_URL` - Messaging link host (default: <https://wa.me>)
//! - `IDOS_HANDOFF_PHONE` - Destination phone number, digits only
//!   (default: 51916796360)
//! - `IDOS_NAVBAR_SCROLL_THRESHOLD` - Scroll offset in pixels after which the
//!   navbar switches style (default: 50)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::path::PathBuf;
use std::str::FromStr;

use idos_core::CurrencyCode;
use thiserror::Error;
use url::Url;

use crate::storage::keys;

const DEFAULT_STORAGE_PATH: &str = ".idos/local_storage.json";
const DEFAULT_STORE_NAME: &str = "IDOS";
const DEFAULT_HANDOFF_BASE_URL: &str = "https://wa.me";
const DEFAULT_HANDOFF_PHONE: &str = "51916796360";
const DEFAULT_NAVBAR_SCROLL_THRESHOLD: u32 = 50;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Storage key holding the serialized cart
    pub storage_key: String,
    /// Path of the file-backed store
    pub storage_path: PathBuf,
    /// Currency of all prices
    pub currency: CurrencyCode,
    /// Store name used in the checkout greeting
    pub store_name: String,
    /// Checkout hand-off destination
    pub handoff: HandoffConfig,
    /// Navbar switches to its scrolled style past this offset
    pub navbar_scroll_threshold: u32,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Destination of the checkout hand-off link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffConfig {
    /// Link host, e.g. `https://wa.me`
    pub base_url: Url,
    /// Destination phone number in international format, digits only
    pub phone: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_key: keys::CART.to_string(),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            currency: CurrencyCode::PEN,
            store_name: DEFAULT_STORE_NAME.to_string(),
            handoff: HandoffConfig::default(),
            navbar_scroll_threshold: DEFAULT_NAVBAR_SCROLL_THRESHOLD,
            sentry_dsn: None,
        }
    }
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_HANDOFF_BASE_URL)
                .unwrap_or_else(|_| unreachable!("default hand-off URL is valid")),
            phone: DEFAULT_HANDOFF_PHONE.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_key = get_env_or_default("IDOS_STORAGE_KEY", keys::CART);
        if storage_key.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "IDOS_STORAGE_KEY".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let storage_path = PathBuf::from(get_env_or_default(
            "IDOS_STORAGE_PATH",
            DEFAULT_STORAGE_PATH,
        ));
        let currency = parse_env("IDOS_CURRENCY", CurrencyCode::PEN)?;
        let store_name = get_env_or_default("IDOS_STORE_NAME", DEFAULT_STORE_NAME);
        let handoff = HandoffConfig::from_env()?;
        let navbar_scroll_threshold =
            parse_env("IDOS_NAVBAR_SCROLL_THRESHOLD", DEFAULT_NAVBAR_SCROLL_THRESHOLD)?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            storage_key,
            storage_path,
            currency,
            store_name,
            handoff,
            navbar_scroll_threshold,
            sentry_dsn,
        })
    }
}

impl HandoffConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = parse_handoff_url(&get_env_or_default(
            "IDOS_HANDOFF_BASE_URL",
            DEFAULT_HANDOFF_BASE_URL,
        ))?;
        let phone = validate_phone(&get_env_or_default(
            "IDOS_HANDOFF_PHONE",
            DEFAULT_HANDOFF_PHONE,
        ))?;
        Ok(Self { base_url, phone })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match get_optional_env(key) {
        Some(value) => value
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

/// The hand-off link must be an absolute http(s) URL with a host.
fn parse_handoff_url(value: &str) -> Result<Url, ConfigError> {
    let invalid = |msg: String| ConfigError::InvalidEnvVar("IDOS_HANDOFF_BASE_URL".to_string(), msg);
    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("must have a host".to_string()));
    }
    Ok(url)
}

/// Phone numbers go straight into the link path, so only digits are allowed.
fn validate_phone(value: &str) -> Result<String, ConfigError> {
    let phone = value.trim().trim_start_matches('+');
    if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            "IDOS_HANDOFF_PHONE".to_string(),
            format!("'{value}' must contain only digits"),
        ));
    }
    Ok(phone.to_string())
}
