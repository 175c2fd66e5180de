//! # Request Handlers
//!
//! Axum request handlers for the checkout bridge.
//!
//! Both payment handlers are stateless per request: the checkout
//! initiator normalizes and forwards, the webhook verifier
//! authenticates and dispatches. Neither keeps anything across
//! invocations.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bridge_core::{BridgeError, CheckoutOrder, OrderItem};
use bridge_paymongo::{
    dispatch_webhook_event, parse_event, parse_signature_header, verify_signature,
    LoggingWebhookHandler, UpstreamResponse, SIGNATURE_HEADER_NAMES,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create checkout request (all fields optional; defaults applied)
#[derive(Debug, Default, Deserialize)]
pub struct CreateCheckoutRequest {
    /// Items to purchase; a sample item is substituted when absent
    #[serde(default)]
    pub items: Vec<CheckoutItem>,
    /// Redirect URL after successful payment
    #[serde(default)]
    pub success_url: Option<String>,
    /// Redirect URL when the buyer cancels
    #[serde(default)]
    pub cancel_url: Option<String>,
    /// Free-text order description
    #[serde(default)]
    pub description: Option<String>,
    /// Allowed payment method types (defaults to gcash + card)
    #[serde(default)]
    pub payment_method_types: Option<Vec<String>>,
    /// Merchant-defined metadata passed through to PayMongo
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Item in checkout request
#[derive(Debug, Deserialize)]
pub struct CheckoutItem {
    /// Display name
    pub name: String,
    /// Description (defaults to empty)
    #[serde(default)]
    pub description: Option<String>,
    /// Product image URLs (defaults to none)
    #[serde(default)]
    pub images: Option<Vec<String>>,
    /// Amount in minor currency units (centavos); must be an integer
    pub amount: u64,
    /// ISO currency code (defaults to PHP)
    #[serde(default)]
    pub currency: Option<String>,
    /// Quantity (defaults to 1)
    #[serde(default)]
    pub quantity: Option<u32>,
}

impl CreateCheckoutRequest {
    /// Apply all defaulting rules, producing a normalized order
    fn into_order(self) -> CheckoutOrder {
        let items = self
            .items
            .into_iter()
            .map(|item| {
                let mut order_item = OrderItem::new(item.name, item.amount);
                if let Some(description) = item.description {
                    order_item = order_item.with_description(description);
                }
                if let Some(images) = item.images {
                    order_item = order_item.with_images(images);
                }
                if let Some(currency) = item.currency {
                    order_item = order_item.with_currency(currency);
                }
                if let Some(quantity) = item.quantity {
                    order_item = order_item.with_quantity(quantity);
                }
                order_item
            })
            .collect();

        let mut order = CheckoutOrder::new(items);
        if let Some(description) = self.description {
            order = order.with_description(description);
        }
        if let Some(types) = self.payment_method_types {
            order = order.with_payment_method_types(types);
        }
        if let Some(url) = self.success_url {
            order = order.with_success_url(url);
        }
        if let Some(url) = self.cancel_url {
            order = order.with_cancel_url(url);
        }
        if !self.metadata.is_empty() {
            order = order.with_metadata(self.metadata);
        }
        order
    }
}

/// Error response (`{"error": ...}`, nothing more)
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

fn bridge_error_to_response(err: BridgeError) -> (StatusCode, Json<ErrorResponse>) {
    if err.is_rejection() {
        warn!("Request rejected: {}", err);
    } else {
        error!("Request failed: {}", err);
    }

    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.to_string())))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "paymongo-bridge",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// CORS preflight for the checkout endpoint (204, headers via CorsLayer)
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Create a checkout session.
///
/// Normalizes the request, forwards it to PayMongo, and relays the
/// provider's status code and JSON body verbatim.
///
/// The body arrives as raw bytes: an absent or empty body is treated
/// as `{}` so the defaulting rules still apply, and a body that fails
/// to parse falls under the handler's catch-all (500 with the
/// message) rather than an extractor rejection.
#[instrument(skip(state, body))]
pub async fn create_checkout(State(state): State<AppState>, body: Bytes) -> Response {
    let request: CreateCheckoutRequest = if body.is_empty() {
        CreateCheckoutRequest::default()
    } else {
        match serde_json::from_slice(&body) {
            Ok(request) => request,
            Err(e) => {
                error!("Request failed: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new(e.to_string())),
                )
                    .into_response();
            }
        }
    };

    let order = request.into_order();

    info!(
        "Creating checkout: {} items, total={}, success_url={}",
        order.items.len(),
        order.total(),
        order.success_url
    );

    match state.paymongo.create_session(&order).await {
        Ok(upstream) => relay_upstream(upstream),
        Err(e) => bridge_error_to_response(e).into_response(),
    }
}

/// Relay the provider response without touching status or body
fn relay_upstream(upstream: UpstreamResponse) -> Response {
    let status =
        StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        upstream.body,
    )
        .into_response()
}

/// Handle a PayMongo webhook.
///
/// The body arrives as raw bytes and is verified before any JSON
/// parsing touches it.
#[instrument(skip(state, headers, body))]
pub async fn paymongo_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match verify_and_dispatch(&state, &headers, &body) {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "status": "received" })))
            .into_response(),
        Err(e) => bridge_error_to_response(e).into_response(),
    }
}

fn verify_and_dispatch(
    state: &AppState,
    headers: &HeaderMap,
    raw_body: &[u8],
) -> Result<(), BridgeError> {
    // Accepted header spellings, first match wins
    let signature_header = SIGNATURE_HEADER_NAMES
        .iter()
        .find_map(|name| headers.get(*name).and_then(|v| v.to_str().ok()))
        .ok_or_else(|| {
            BridgeError::SignatureFormat("Missing Paymongo-Signature header".to_string())
        })?;

    let signature = parse_signature_header(signature_header)?;
    let secret = state.paymongo.config().webhook_secret()?;

    verify_signature(secret, raw_body, &signature)?;

    // Only now is the body trusted enough to parse
    let event = parse_event(raw_body)?;
    dispatch_webhook_event(&LoggingWebhookHandler, &event)
}
