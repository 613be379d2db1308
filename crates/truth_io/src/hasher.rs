//! SHA-256 fingerprinting over canonical JSON bytes.
//!
//! Deterministic: the same canonical structure yields the same lowercase
//! 64-hex digest regardless of OS or architecture.

use digest::Digest;
use serde::Serialize;
use sha2::Sha256;

use crate::canonical_json::to_canonical_bytes;
use crate::IoError;

/// Lowercase 64-hex SHA-256 of raw bytes.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// SHA-256 of `value`'s canonical JSON encoding.
pub fn sha256_canonical<T: Serialize>(value: &T) -> Result<String, IoError> {
    let bytes = to_canonical_bytes(value)?;
    Ok(sha256_hex(&bytes))
}
