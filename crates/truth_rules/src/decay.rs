//! Rule D — time decay applied to the stored bias before it is used.

use truth_core::{floor_div, state::PerItemState};

/// Decay kicks in once the gap since the item's last update exceeds this
/// many seconds.
pub const DECAY_GAP_SECONDS: i64 = 604_800;

/// The bias value to use for this event's decision. Never mutates
/// `state.bias_cents` itself — decay affects only the value read for this
/// one evaluation.
pub fn effective_bias(state: &PerItemState, ts: i64) -> i64 {
    let raw_bias = state.bias_cents;
    if state.last_updated_ts > 0 && (ts - state.last_updated_ts) > DECAY_GAP_SECONDS {
        floor_div(raw_bias, 2)
    } else {
        raw_bias
    }
}
