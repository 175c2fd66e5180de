//! # bridge-core
//!
//! Core types and errors for the paymongo-bridge service.
//!
//! This crate provides:
//! - `BridgeError` for typed error handling
//! - `OrderItem` and `CheckoutOrder` for the normalized checkout flow
//! - `WebhookEvent` and `WebhookEventType` for verified webhook payloads
//!
//! No I/O happens here; the provider integration lives in
//! `bridge-paymongo` and the HTTP surface in `bridge-api`.

pub mod checkout;
pub mod error;
pub mod event;

// Re-exports for convenience
pub use checkout::{
    CheckoutOrder, OrderItem, DEFAULT_CANCEL_URL, DEFAULT_CURRENCY, DEFAULT_PAYMENT_METHODS,
    DEFAULT_SUCCESS_URL,
};
pub use error::{BridgeError, BridgeResult};
pub use event::{WebhookEvent, WebhookEventType};
