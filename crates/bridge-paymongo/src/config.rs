//! # PayMongo Configuration
//!
//! Configuration management for the PayMongo integration.
//! All secrets are loaded from environment variables.
//!
//! Unlike a long-lived service that refuses to boot without credentials,
//! this bridge mirrors its serverless origin: a missing secret is a
//! per-request configuration error (HTTP 500 on the affected endpoint),
//! so `from_env` never fails.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use bridge_core::{BridgeError, BridgeResult};
use std::env;

/// Env var holding the API secret key (sk_test_... or sk_live_...)
pub const ENV_SECRET: &str = "PAYMONGO_SECRET";

/// Env var holding the webhook signing secret (whsk_...)
pub const ENV_WEBHOOK_SECRET: &str = "PAYMONGO_WEBHOOK_SECRET";

/// Env var overriding the API base URL (for testing/mocking)
pub const ENV_API_BASE_URL: &str = "PAYMONGO_API_BASE_URL";

const DEFAULT_API_BASE_URL: &str = "https://api.paymongo.com";

/// PayMongo API configuration
#[derive(Debug, Clone)]
pub struct PayMongoConfig {
    /// Secret API key, if configured
    pub secret: Option<String>,

    /// Webhook signing secret, if configured
    pub webhook_secret: Option<String>,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,
}

impl PayMongoConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `PAYMONGO_SECRET` and `PAYMONGO_WEBHOOK_SECRET`. Absence is
    /// not an error here; the accessors report it when a request
    /// actually needs the credential.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            secret: env::var(ENV_SECRET).ok(),
            webhook_secret: env::var(ENV_WEBHOOK_SECRET).ok(),
            api_base_url: env::var(ENV_API_BASE_URL)
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
        }
    }

    /// Create config with explicit values (for testing)
    pub fn new(secret: impl Into<String>, webhook_secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
            webhook_secret: Some(webhook_secret.into()),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Config with no secrets at all (for testing the 500 paths)
    pub fn empty() -> Self {
        Self {
            secret: None,
            webhook_secret: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// The API secret, or a configuration error naming the env var
    pub fn secret(&self) -> BridgeResult<&str> {
        self.secret.as_deref().ok_or_else(|| {
            BridgeError::Configuration(format!("Missing {} env var", ENV_SECRET))
        })
    }

    /// The webhook signing secret, or a configuration error naming the env var
    pub fn webhook_secret(&self) -> BridgeResult<&str> {
        self.webhook_secret.as_deref().ok_or_else(|| {
            BridgeError::Configuration(format!("Missing {} env var", ENV_WEBHOOK_SECRET))
        })
    }

    /// Authorization header for the PayMongo API: HTTP Basic auth with
    /// the secret as username and an empty password.
    pub fn auth_header(&self) -> BridgeResult<String> {
        let secret = self.secret()?;
        Ok(format!("Basic {}", BASE64.encode(format!("{}:", secret))))
    }

    /// Check if using a test-mode key
    pub fn is_test_mode(&self) -> bool {
        self.secret
            .as_deref()
            .map(|s| s.starts_with("sk_test_"))
            .unwrap_or(false)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header() {
        let config = PayMongoConfig::new("sk_test_abc", "whsk_secret");

        // base64("sk_test_abc:") — username is the secret, password empty
        assert_eq!(config.auth_header().unwrap(), "Basic c2tfdGVzdF9hYmM6");
    }

    #[test]
    fn test_missing_secret_message() {
        let config = PayMongoConfig::empty();

        let err = config.secret().unwrap_err();
        assert_eq!(err.to_string(), "Missing PAYMONGO_SECRET env var");
        assert_eq!(err.status_code(), 500);

        let err = config.webhook_secret().unwrap_err();
        assert_eq!(err.to_string(), "Missing PAYMONGO_WEBHOOK_SECRET env var");
    }

    #[test]
    fn test_auth_header_requires_secret() {
        let config = PayMongoConfig::empty();
        assert!(config.auth_header().is_err());
    }

    #[test]
    fn test_test_mode_detection() {
        assert!(PayMongoConfig::new("sk_test_abc", "whsk_x").is_test_mode());
        assert!(!PayMongoConfig::new("sk_live_abc", "whsk_x").is_test_mode());
        assert!(!PayMongoConfig::empty().is_test_mode());
    }
}
