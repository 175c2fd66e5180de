//! # Routes
//!
//! Axum router configuration for the checkout bridge.

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue},
    middleware::map_response,
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Attach the fixed CORS policy for the storefront: any origin,
/// POST/OPTIONS, Content-Type only.
///
/// Applied as a plain response mapper instead of `tower_http::cors`,
/// which answers every OPTIONS request itself with 200 and would never
/// let the 204 preflight handler run.
async fn cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

/// Create the main application router
///
/// Routes:
/// - GET  /health - Health check (also at /)
/// - POST /api/v1/checkout - Create checkout session (CORS headers on
///   every response, OPTIONS answered with 204)
/// - POST /webhook/paymongo - PayMongo webhook handler
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/checkout",
            post(handlers::create_checkout).options(handlers::preflight),
        )
        .layer(map_response(cors_headers));

    // Webhook routes (no CORS — server-to-server, must accept raw body)
    let webhook_routes = Router::new().route("/paymongo", post(handlers::paymongo_webhook));

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // API v1
        .nest("/api/v1", api_routes)
        // Webhooks
        .nest("/webhook", webhook_routes)
        // Middleware
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
