//! # bridge-paymongo
//!
//! PayMongo integration for paymongo-bridge-rs.
//!
//! This crate provides:
//!
//! 1. **PayMongoClient** - Checkout Sessions API client
//!    - Builds the `data.attributes` envelope from a normalized order
//!    - HTTP Basic auth (secret key as username, empty password)
//!    - Relays the provider's status and body verbatim
//!
//! 2. **Signature verification** - the security-critical path
//!    - `t=...,te=...,li=...` header parsing (test-mode preferred)
//!    - HMAC-SHA-256 over `{timestamp}.{rawBody}`, lowercase hex
//!    - Constant-time comparison
//!
//! ## Webhook Handling
//!
//! ```rust,ignore
//! use bridge_paymongo::{parse_signature_header, verify_signature, parse_event};
//! use bridge_paymongo::{dispatch_webhook_event, LoggingWebhookHandler};
//!
//! // In your webhook endpoint, with the RAW body bytes:
//! let header = parse_signature_header(signature_header)?;
//! verify_signature(webhook_secret, &raw_body, &header)?;
//! let event = parse_event(&raw_body)?;
//! dispatch_webhook_event(&LoggingWebhookHandler, &event)?;
//! ```

pub mod checkout;
pub mod config;
pub mod signature;
pub mod webhook;

// Re-exports
pub use checkout::{PayMongoClient, UpstreamResponse};
pub use config::{PayMongoConfig, ENV_SECRET, ENV_WEBHOOK_SECRET};
pub use signature::{
    compute_signature, constant_time_compare, parse_signature_header, verify_signature,
    SignatureHeader, SignatureMode, SIGNATURE_HEADER_NAMES,
};
pub use webhook::{
    dispatch_webhook_event, parse_event, LoggingWebhookHandler, WebhookHandler,
};
