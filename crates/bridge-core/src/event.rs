//! # Webhook Event Types
//!
//! Provider-neutral event model for verified webhook payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Webhook event types we care about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookEventType {
    /// A hosted checkout session was paid
    CheckoutPaymentPaid,
    /// A standalone payment succeeded
    PaymentPaid,
    /// A payment attempt failed
    PaymentFailed,
    /// A payment was refunded
    PaymentRefunded,
    /// A source became chargeable (e-wallet flows)
    SourceChargeable,
    /// Unknown event (passthrough)
    Unknown(String),
}

impl WebhookEventType {
    /// The processor's string discriminator for this event
    pub fn as_str(&self) -> &str {
        match self {
            WebhookEventType::CheckoutPaymentPaid => "checkout_session.payment.paid",
            WebhookEventType::PaymentPaid => "payment.paid",
            WebhookEventType::PaymentFailed => "payment.failed",
            WebhookEventType::PaymentRefunded => "payment.refunded",
            WebhookEventType::SourceChargeable => "source.chargeable",
            WebhookEventType::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for WebhookEventType {
    fn from(s: &str) -> Self {
        match s {
            "checkout_session.payment.paid" => WebhookEventType::CheckoutPaymentPaid,
            "payment.paid" => WebhookEventType::PaymentPaid,
            "payment.failed" => WebhookEventType::PaymentFailed,
            "payment.refunded" => WebhookEventType::PaymentRefunded,
            "source.chargeable" => WebhookEventType::SourceChargeable,
            other => WebhookEventType::Unknown(other.to_string()),
        }
    }
}

/// A verified, parsed webhook event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Event ID from the processor (if present)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,

    /// Event type discriminator
    pub event_type: WebhookEventType,

    /// The resource the event describes (payment, checkout session, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<serde_json::Value>,

    /// Full raw payload (for debugging and downstream consumers)
    pub raw: serde_json::Value,

    /// When this service received the event
    pub received_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_round_trip() {
        let known = [
            "checkout_session.payment.paid",
            "payment.paid",
            "payment.failed",
            "payment.refunded",
            "source.chargeable",
        ];

        for name in known {
            let event_type = WebhookEventType::from(name);
            assert!(!matches!(event_type, WebhookEventType::Unknown(_)));
            assert_eq!(event_type.as_str(), name);
        }
    }

    #[test]
    fn test_unknown_event_passthrough() {
        let event_type = WebhookEventType::from("qrph.expired");
        assert_eq!(
            event_type,
            WebhookEventType::Unknown("qrph.expired".to_string())
        );
        assert_eq!(event_type.as_str(), "qrph.expired");
    }
}
