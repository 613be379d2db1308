//! Atomic load/save of `rules_state.json`, with corruption detection on load.

use std::path::Path;

use truth_core::EngineState;

use crate::canonical_json::{to_canonical_bytes, write_canonical_file};
use crate::hasher::sha256_hex;
use crate::IoError;

/// Load `EngineState` from `path`. A missing file yields a fresh empty
/// state rather than an error. An existing file whose embedded
/// `state_hash` disagrees with the recomputed fingerprint over the rest of
/// its fields is `IoError::StateCorrupt` — never silently repaired.
pub fn load(path: &Path) -> Result<EngineState, IoError> {
    if !path.exists() {
        return Ok(EngineState::empty());
    }
    let bytes = std::fs::read(path).map_err(IoError::from)?;
    let state: EngineState = serde_json::from_slice(&bytes)?;

    let payload_bytes = to_canonical_bytes(&state.hashed_payload())?;
    let recomputed = sha256_hex(&payload_bytes);
    if recomputed != state.state_hash {
        tracing::warn!(path = %path.display(), expected = %state.state_hash, actual = %recomputed, "state hash mismatch on load");
        return Err(IoError::StateCorrupt {
            expected: state.state_hash.clone(),
            actual: recomputed,
        });
    }
    Ok(state)
}

/// Refresh `state.state_hash` and atomically write the canonical form to
/// `path`.
pub fn save(path: &Path, state: &mut EngineState) -> Result<(), IoError> {
    let payload_bytes = to_canonical_bytes(&state.hashed_payload())?;
    state.state_hash = sha256_hex(&payload_bytes);
    write_canonical_file(path, state)
}
