//! # Application State
//!
//! Shared state for the Axum application: server configuration and the
//! PayMongo client. Secrets live inside the client's config and are
//! injected here once, at startup — handlers never read the
//! environment themselves.

use bridge_paymongo::{PayMongoClient, PayMongoConfig};
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PayMongo API client (carries both secrets)
    pub paymongo: Arc<PayMongoClient>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state from the environment.
    ///
    /// Missing payment secrets are NOT fatal here: the affected
    /// endpoint reports them as HTTP 500 per request, matching the
    /// serverless deployment this service replaces.
    pub fn new() -> Self {
        Self {
            paymongo: Arc::new(PayMongoClient::from_env()),
            config: AppConfig::from_env(),
        }
    }

    /// Create state with an explicit PayMongo config (for testing)
    pub fn with_paymongo_config(config: PayMongoConfig) -> Self {
        Self {
            paymongo: Arc::new(PayMongoClient::new(config)),
            config: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                environment: "test".to_string(),
            },
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        // Clear env vars for test
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");

        let config = AppConfig::from_env();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "test".to_string(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }
}
