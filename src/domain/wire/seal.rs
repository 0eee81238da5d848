//! SHA-256 seal over transport-encoded message data.
//!
//! The seal is the lowercase hex digest of the transport-encoded string with
//! the trimmed merchant secret appended. The `data + secret` order is part of
//! the wire contract and must not be swapped.

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Computes the seal for a transport-encoded payload.
pub fn compute_seal(transport_encoded: &str, secret: &SecretString) -> String {
    let mut hasher = Sha256::new();
    hasher.update(transport_encoded.as_bytes());
    hasher.update(secret.expose_secret().trim().as_bytes());
    hex::encode(hasher.finalize())
}

/// Verifies a candidate seal against a recomputed one.
///
/// Comparison is constant-time and case-insensitive on the candidate hex.
/// A mismatch is a verification failure, not an error; the caller decides
/// how to react. The secret is never logged.
pub fn verify_seal(transport_encoded: &str, secret: &SecretString, candidate_seal: &str) -> bool {
    let expected = compute_seal(transport_encoded, secret);
    let candidate = candidate_seal.trim().to_ascii_lowercase();
    constant_time_compare(expected.as_bytes(), candidate.as_bytes())
}

fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
