//! # PayMongo Webhook Handling
//!
//! Event parsing and dispatch for verified webhook deliveries.
//!
//! Parsing happens only AFTER signature verification succeeds; the
//! verification itself (see `signature`) works on the raw bytes and
//! never touches serde.

use bridge_core::{BridgeError, BridgeResult, WebhookEvent, WebhookEventType};
use chrono::Utc;
use tracing::{debug, info, warn};

/// Parse a verified raw body into a `WebhookEvent`.
///
/// PayMongo wraps events as
/// `{"data":{"id":...,"attributes":{"type":...,"data":{...}}}}`.
/// A body that is not valid JSON is a parse error (the signature was
/// valid, so the sender holds the secret — but we still refuse to
/// acknowledge garbage). A missing type discriminator is tolerated and
/// dispatched as an unknown event, matching the tolerant consumer this
/// bridge replaces.
pub fn parse_event(raw_body: &[u8]) -> BridgeResult<WebhookEvent> {
    let raw: serde_json::Value = serde_json::from_slice(raw_body)
        .map_err(|e| BridgeError::WebhookParse(format!("Failed to parse webhook body: {}", e)))?;

    let event_id = raw
        .pointer("/data/id")
        .and_then(|v| v.as_str())
        .map(String::from);

    let event_type = raw
        .pointer("/data/attributes/type")
        .and_then(|v| v.as_str())
        .map(WebhookEventType::from)
        .unwrap_or_else(|| WebhookEventType::Unknown("unspecified".to_string()));

    let resource = raw.pointer("/data/attributes/data").cloned();

    Ok(WebhookEvent {
        event_id,
        event_type,
        resource,
        raw,
        received_at: Utc::now(),
    })
}

/// Webhook event handler trait
///
/// Implement this trait to react to payment events. Every method has a
/// logging default, so implementors override only what they care about.
/// Persisting order state belongs behind this trait; the bridge itself
/// only logs.
#[allow(unused_variables)]
pub trait WebhookHandler: Send + Sync {
    /// Called when a hosted checkout session is paid
    fn on_checkout_payment_paid(&self, event: &WebhookEvent) -> BridgeResult<()> {
        info!("Checkout session paid: id={:?}", event.event_id);
        Ok(())
    }

    /// Called when a standalone payment succeeds
    fn on_payment_paid(&self, event: &WebhookEvent) -> BridgeResult<()> {
        info!("Payment paid: id={:?}", event.event_id);
        Ok(())
    }

    /// Called when a payment attempt fails
    fn on_payment_failed(&self, event: &WebhookEvent) -> BridgeResult<()> {
        warn!("Payment failed: id={:?}", event.event_id);
        Ok(())
    }

    /// Called when a payment is refunded
    fn on_payment_refunded(&self, event: &WebhookEvent) -> BridgeResult<()> {
        info!("Payment refunded: id={:?}", event.event_id);
        Ok(())
    }

    /// Called when an e-wallet source becomes chargeable
    fn on_source_chargeable(&self, event: &WebhookEvent) -> BridgeResult<()> {
        info!("Source chargeable: id={:?}", event.event_id);
        Ok(())
    }

    /// Called for unknown/unhandled events
    fn on_unknown_event(&self, event: &WebhookEvent) -> BridgeResult<()> {
        debug!("Unhandled webhook event: {}", event.event_type.as_str());
        Ok(())
    }
}

/// Default no-op webhook handler (just logs events)
pub struct LoggingWebhookHandler;

impl WebhookHandler for LoggingWebhookHandler {}

/// Dispatch a webhook event to the appropriate handler method
pub fn dispatch_webhook_event(
    handler: &dyn WebhookHandler,
    event: &WebhookEvent,
) -> BridgeResult<()> {
    info!("PayMongo webhook event: {}", event.event_type.as_str());

    match &event.event_type {
        WebhookEventType::CheckoutPaymentPaid => handler.on_checkout_payment_paid(event),
        WebhookEventType::PaymentPaid => handler.on_payment_paid(event),
        WebhookEventType::PaymentFailed => handler.on_payment_failed(event),
        WebhookEventType::PaymentRefunded => handler.on_payment_refunded(event),
        WebhookEventType::SourceChargeable => handler.on_source_chargeable(event),
        WebhookEventType::Unknown(_) => handler.on_unknown_event(event),
    }
}
