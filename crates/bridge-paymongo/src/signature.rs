//! # Webhook Signature Verification
//!
//! PayMongo signs each webhook delivery with an HMAC-SHA-256 over
//! `{timestamp}.{rawBody}` keyed by the endpoint's signing secret, and
//! sends it in the `Paymongo-Signature` header as comma-separated
//! `k=v` fields: `t` (timestamp), `te` (test-mode signature) and/or
//! `li` (live-mode signature).
//!
//! Verification must run against the untouched raw body bytes —
//! re-serializing parsed JSON can change byte layout and break the HMAC.

use bridge_core::{BridgeError, BridgeResult};

/// Accepted spellings of the signature header, tried in order
pub const SIGNATURE_HEADER_NAMES: &[&str] = &["paymongo-signature", "paymongo_signature"];

/// Which signing key produced the signature we verified against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureMode {
    Test,
    Live,
}

/// Parsed contents of a `Paymongo-Signature` header
#[derive(Debug, Clone)]
pub struct SignatureHeader {
    /// Timestamp field (`t`), kept as the opaque string that was signed
    pub timestamp: String,
    /// The hex signature selected for verification
    pub signature: String,
    /// Whether the test-mode or live-mode field was selected
    pub mode: SignatureMode,
}

fn format_error() -> BridgeError {
    BridgeError::SignatureFormat("Invalid signature header format".to_string())
}

/// Parse a `t=...,te=...,li=...` signature header.
///
/// The test-mode field (`te`) takes precedence over the live-mode field
/// (`li`) whenever both are present, matching the upstream integration
/// this bridge replaces. Missing timestamp or signature is a format
/// error.
pub fn parse_signature_header(header: &str) -> BridgeResult<SignatureHeader> {
    let mut timestamp = None;
    let mut test_sig = None;
    let mut live_sig = None;

    // First occurrence of each key wins; duplicates are ignored
    for part in header.split(',') {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        match key.trim() {
            "t" if timestamp.is_none() => timestamp = Some(value.to_string()),
            "te" if test_sig.is_none() => test_sig = Some(value.to_string()),
            "li" if live_sig.is_none() => live_sig = Some(value.to_string()),
            _ => {}
        }
    }

    let timestamp = timestamp.filter(|t| !t.is_empty()).ok_or_else(format_error)?;

    let (signature, mode) = match (test_sig, live_sig) {
        (Some(sig), _) => (sig, SignatureMode::Test),
        (None, Some(sig)) => (sig, SignatureMode::Live),
        (None, None) => return Err(format_error()),
    };

    if signature.is_empty() {
        return Err(format_error());
    }

    Ok(SignatureHeader {
        timestamp,
        signature,
        mode,
    })
}

/// Compute the expected signature: lowercase-hex HMAC-SHA-256 over
/// `{timestamp}.{rawBody}` keyed by the webhook secret.
///
/// The body bytes are fed to the MAC directly so non-UTF-8 payloads
/// hash exactly as delivered.
pub fn compute_signature(secret: &str, timestamp: &str, raw_body: &[u8]) -> String {
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    type HmacSha256 = Hmac<Sha256>;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(raw_body);
    hex::encode(mac.finalize().into_bytes())
}

/// Constant-time string equality. Never short-circuits on the first
/// differing byte, so timing does not reveal how much of a guessed
/// signature matched.
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// Verify a parsed signature header against the raw body.
///
/// Pure function of its inputs: the same (secret, body, header) triple
/// always yields the same outcome.
pub fn verify_signature(
    secret: &str,
    raw_body: &[u8],
    header: &SignatureHeader,
) -> BridgeResult<()> {
    let expected = compute_signature(secret, &header.timestamp, raw_body);

    if constant_time_compare(&header.signature, &expected) {
        Ok(())
    } else {
        Err(BridgeError::SignatureMismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test";

    fn signed_header(secret: &str, timestamp: &str, body: &[u8]) -> SignatureHeader {
        SignatureHeader {
            timestamp: timestamp.to_string(),
            signature: compute_signature(secret, timestamp, body),
            mode: SignatureMode::Test,
        }
    }

    #[test]
    fn test_parse_signature_header() {
        let parsed = parse_signature_header("t=1000,te=abc123").unwrap();

        assert_eq!(parsed.timestamp, "1000");
        assert_eq!(parsed.signature, "abc123");
        assert_eq!(parsed.mode, SignatureMode::Test);
    }

    #[test]
    fn test_live_signature_used_when_no_test() {
        let parsed = parse_signature_header("t=1000,li=def456").unwrap();

        assert_eq!(parsed.signature, "def456");
        assert_eq!(parsed.mode, SignatureMode::Live);
    }

    #[test]
    fn test_test_signature_preferred_over_live() {
        let parsed = parse_signature_header("t=1000,te=abc123,li=def456").unwrap();

        assert_eq!(parsed.signature, "abc123");
        assert_eq!(parsed.mode, SignatureMode::Test);
    }

    #[test]
    fn test_field_order_does_not_matter() {
        let parsed = parse_signature_header("li=def456,t=1000,te=abc123").unwrap();

        assert_eq!(parsed.timestamp, "1000");
        assert_eq!(parsed.signature, "abc123");
    }

    #[test]
    fn test_duplicate_fields_first_wins() {
        let parsed = parse_signature_header("t=1000,t=2000,te=first,te=second").unwrap();

        assert_eq!(parsed.timestamp, "1000");
        assert_eq!(parsed.signature, "first");
    }

    #[test]
    fn test_missing_timestamp_rejected() {
        let err = parse_signature_header("te=abc123").unwrap_err();
        assert_eq!(err.to_string(), "Invalid signature header format");
    }

    #[test]
    fn test_missing_both_signatures_rejected() {
        assert!(parse_signature_header("t=1000").is_err());
        assert!(parse_signature_header("t=1000,v1=abc").is_err());
        assert!(parse_signature_header("garbage").is_err());
        assert!(parse_signature_header("").is_err());
    }

    #[test]
    fn test_compute_signature_is_lowercase_hex() {
        let sig = compute_signature(SECRET, "1000", b"{}");

        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_signature_depends_on_all_inputs() {
        let base = compute_signature(SECRET, "1000", b"body");

        assert_ne!(base, compute_signature("other_secret", "1000", b"body"));
        assert_ne!(base, compute_signature(SECRET, "1001", b"body"));
        assert_ne!(base, compute_signature(SECRET, "1000", b"bodY"));
    }

    #[test]
    fn test_timestamp_body_boundary_is_unambiguous() {
        // "1000" + ".x" vs "1000.x" + "" would collide if the dot were
        // appended carelessly; the two-field split keeps them distinct
        // because the dot is always inserted between timestamp and body.
        let a = compute_signature(SECRET, "1000", b".x");
        let b = compute_signature(SECRET, "1000..x", b"");
        assert_ne!(a, b);
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("abc123", "abc123"));
        assert!(!constant_time_compare("abc123", "abc124"));
        assert!(!constant_time_compare("abc", "abcd"));
        assert!(constant_time_compare("", ""));
    }

    #[test]
    fn test_verify_round_trip() {
        let body = br#"{"data":{"attributes":{"type":"checkout_session.payment.paid"}}}"#;
        let header = signed_header(SECRET, "1000", body);

        assert!(verify_signature(SECRET, body, &header).is_ok());
    }

    #[test]
    fn test_single_byte_mutation_fails() {
        let body = br#"{"data":{"attributes":{"type":"payment.paid"}}}"#;
        let header = signed_header(SECRET, "1000", body);

        let mut tampered = body.to_vec();
        tampered[10] ^= 0x01;

        let err = verify_signature(SECRET, &tampered, &header).unwrap_err();
        assert_eq!(err.to_string(), "Invalid signature");
    }

    #[test]
    fn test_wrong_secret_fails() {
        let body = b"{}";
        let header = signed_header("whsec_other", "1000", body);

        assert!(verify_signature(SECRET, body, &header).is_err());
    }

    #[test]
    fn test_verification_is_idempotent() {
        let body = b"{\"ok\":true}";
        let good = signed_header(SECRET, "1000", body);
        let mut bad = signed_header(SECRET, "1000", body);
        bad.signature.replace_range(0..1, "x");

        for _ in 0..2 {
            assert!(verify_signature(SECRET, body, &good).is_ok());
            assert!(verify_signature(SECRET, body, &bad).is_err());
        }
    }
}
