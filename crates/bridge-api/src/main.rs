//! # PayMongo Bridge
//!
//! Storefront-to-PayMongo checkout bridge.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export PAYMONGO_SECRET=sk_test_...
//! export PAYMONGO_WEBHOOK_SECRET=whsk_...
//!
//! # Run the server
//! paymongo-bridge
//! ```

use bridge_api::{routes, state::AppState};
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new();

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);

    // Missing secrets are reported per request (HTTP 500), not at boot;
    // warn early so the operator sees it before the first failure.
    let paymongo = state.paymongo.config();
    if paymongo.secret.is_none() {
        warn!("PAYMONGO_SECRET not set; checkout requests will fail with 500");
    }
    if paymongo.webhook_secret.is_none() {
        warn!("PAYMONGO_WEBHOOK_SECRET not set; webhooks will fail with 500");
    }
    if paymongo.is_test_mode() {
        info!("PayMongo test-mode key detected");
    }

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚀 PayMongo bridge starting on http://{}", addr);

    if !is_prod {
        info!("💳 Checkout: POST http://{}/api/v1/checkout", addr);
        info!("🔔 Webhook: POST http://{}/webhook/paymongo", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
