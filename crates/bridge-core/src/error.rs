//! # Bridge Error Types
//!
//! Typed error handling for the paymongo-bridge service.
//! All bridge operations return `Result<T, BridgeError>`.

use thiserror::Error;

/// Core error type for all bridge operations
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Configuration errors (missing secrets, invalid config).
    /// The message names the missing env var so the operator can fix it.
    #[error("{0}")]
    Configuration(String),

    /// Signature header absent or unparsable
    #[error("{0}")]
    SignatureFormat(String),

    /// Computed and provided signatures differ.
    /// Deliberately carries no detail beyond the fixed message.
    #[error("Invalid signature")]
    SignatureMismatch,

    /// Webhook payload failed JSON parsing after signature success
    #[error("Webhook parse error: {0}")]
    WebhookParse(String),

    /// Network or protocol failure talking to the payment processor
    #[error("{0}")]
    Upstream(String),
}

impl BridgeError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            BridgeError::Configuration(_) => 500,
            BridgeError::SignatureFormat(_) => 400,
            BridgeError::SignatureMismatch => 400,
            BridgeError::WebhookParse(_) => 400,
            BridgeError::Upstream(_) => 500,
        }
    }

    /// Returns true if the error indicates a security-relevant rejection.
    /// These are logged at WARN rather than ERROR and never retried.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            BridgeError::SignatureFormat(_) | BridgeError::SignatureMismatch
        )
    }
}

/// Result type alias for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            BridgeError::Configuration("Missing PAYMONGO_SECRET env var".into()).status_code(),
            500
        );
        assert_eq!(BridgeError::SignatureMismatch.status_code(), 400);
        assert_eq!(
            BridgeError::SignatureFormat("Invalid signature header format".into()).status_code(),
            400
        );
        assert_eq!(BridgeError::Upstream("connection refused".into()).status_code(), 500);
    }

    #[test]
    fn test_mismatch_message_is_fixed() {
        // The response body for a mismatch must never leak detail
        assert_eq!(BridgeError::SignatureMismatch.to_string(), "Invalid signature");
    }

    #[test]
    fn test_rejection_classification() {
        assert!(BridgeError::SignatureMismatch.is_rejection());
        assert!(BridgeError::SignatureFormat("bad".into()).is_rejection());
        assert!(!BridgeError::Upstream("timeout".into()).is_rejection());
    }
}
