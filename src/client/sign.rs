//! Request signature over the canonical query string

use sha2::{Digest, Sha256};

use crate::config::ApiCredentials;

/// Sign a canonical query string with the account's private key.
///
/// The signature is the lowercase hex SHA-256 of the private key followed
/// by the query string. The DAM recomputes the same digest server-side and
/// rejects any mismatch, so the output must be byte-identical for
/// identical input across runs.
pub fn sign(credentials: &ApiCredentials, canonical_query: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(credentials.private_key().as_bytes());
    hasher.update(canonical_query.as_bytes());
    format!("{:x}", hasher.finalize())
}
