//! truth_io — canonical JSON, SHA-256 fingerprinting, and atomic on-disk
//! persistence.
//!
//! Single source of truth for bytes-on-disk: every hashing and
//! serialization path in the workspace funnels through
//! [`canonical_json::to_canonical_bytes`], so there is exactly one place
//! that could introduce non-determinism.

#![forbid(unsafe_code)]

use thiserror::Error;

pub mod audit_log;
pub mod canonical_json;
pub mod events;
pub mod hasher;
pub mod state_store;

/// Unified error for every filesystem, JSON, and hashing path in this crate.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("io error: {0}")]
    Io(String),

    #[error("json error: {0}")]
    Json(String),

    #[error("state corrupt: embedded hash {expected} does not match recomputed hash {actual}")]
    StateCorrupt { expected: String, actual: String },
}

pub type IoResult<T> = Result<T, IoError>;

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json(e.to_string())
    }
}

pub mod prelude {
    pub use crate::canonical_json::{to_canonical_bytes, write_canonical_file};
    pub use crate::hasher::{sha256_canonical, sha256_hex};
    pub use crate::{IoError, IoResult};
}
