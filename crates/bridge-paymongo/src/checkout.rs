//! # PayMongo Checkout Sessions
//!
//! Client for the PayMongo Checkout Sessions API. The bridge acts as a
//! transparent proxy with input normalization: it builds the provider's
//! envelope from a normalized order, then relays the provider's status
//! code and JSON body to the caller untouched.

use crate::config::PayMongoConfig;
use bridge_core::{BridgeError, BridgeResult, CheckoutOrder};
use reqwest::Client;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// The provider's response, relayed verbatim to the storefront
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    /// HTTP status code returned by PayMongo
    pub status: u16,
    /// Raw JSON body as received
    pub body: String,
}

/// PayMongo Checkout Sessions client
pub struct PayMongoClient {
    config: PayMongoConfig,
    client: Client,
}

impl PayMongoClient {
    /// Create a new client
    pub fn new(config: PayMongoConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::new(PayMongoConfig::from_env())
    }

    pub fn config(&self) -> &PayMongoConfig {
        &self.config
    }

    /// Create a hosted checkout session.
    ///
    /// The credential check happens before anything is sent: a missing
    /// `PAYMONGO_SECRET` yields a configuration error with no outbound
    /// call. Network and body-read failures surface as `Upstream`
    /// errors; provider-side rejections (4xx/5xx from PayMongo) are NOT
    /// errors here — they are relayed like any other response.
    #[instrument(skip(self, order), fields(items = order.items.len(), total = order.total()))]
    pub async fn create_session(&self, order: &CheckoutOrder) -> BridgeResult<UpstreamResponse> {
        let auth = self.config.auth_header()?;
        let payload = CheckoutSessionRequest::from_order(order);

        debug!(
            "Creating PayMongo checkout session: {} items, methods={:?}",
            order.items.len(),
            order.payment_method_types
        );

        let url = format!("{}/v1/checkout_sessions", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", auth)
            .json(&payload)
            .send()
            .await
            .map_err(|e| BridgeError::Upstream(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BridgeError::Upstream(e.to_string()))?;

        if status.is_success() {
            info!("PayMongo checkout session created: status={}", status);
        } else {
            warn!("PayMongo API error relayed: status={}, body={}", status, body);
        }

        Ok(UpstreamResponse {
            status: status.as_u16(),
            body,
        })
    }
}

// =============================================================================
// PayMongo API Types
// =============================================================================

#[derive(Debug, Serialize)]
struct CheckoutSessionRequest {
    data: CheckoutSessionData,
}

#[derive(Debug, Serialize)]
struct CheckoutSessionData {
    attributes: CheckoutSessionAttributes,
}

#[derive(Debug, Serialize)]
struct CheckoutSessionAttributes {
    description: String,
    line_items: Vec<PayMongoLineItem>,
    payment_method_types: Vec<String>,
    success_url: String,
    cancel_url: String,
    metadata: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
struct PayMongoLineItem {
    name: String,
    description: String,
    images: Vec<String>,
    /// Integer amount in minor currency units (centavos)
    amount: u64,
    currency: String,
    quantity: u32,
}

impl CheckoutSessionRequest {
    fn from_order(order: &CheckoutOrder) -> Self {
        let line_items = order
            .items
            .iter()
            .map(|item| PayMongoLineItem {
                name: item.name.clone(),
                description: item.description.clone(),
                images: item.images.clone(),
                amount: item.amount,
                currency: item.currency.clone(),
                quantity: item.quantity,
            })
            .collect();

        Self {
            data: CheckoutSessionData {
                attributes: CheckoutSessionAttributes {
                    description: order.description.clone(),
                    line_items,
                    payment_method_types: order.payment_method_types.clone(),
                    success_url: order.success_url.clone(),
                    cancel_url: order.cancel_url.clone(),
                    metadata: order.metadata.clone(),
                },
            },
        }
    }
}
