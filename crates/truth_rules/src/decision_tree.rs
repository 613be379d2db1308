//! Rule B — the total decision tree dispatching on
//! `{HISTORIC, SUPPLIER, HUMAN} x {NONE, QUOTE_ACCEPTED, QUOTE_REJECTED}`.

use truth_core::event::{Event, Outcome, Source};
use truth_core::state::{PerItemCacheEntry, PerItemState};

use crate::candidates;
use crate::circuit_breaker;
use crate::decay;
use crate::decision::{DecisionTag, Flag};
use crate::fallback;
use crate::learning;

/// The result of evaluating one event: the price to use, what produced it,
/// any supplementary flags, and the per-item state to commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalOutcome {
    pub final_price_cents: i64,
    pub decision: DecisionTag,
    pub flags: Vec<Flag>,
    pub state: PerItemState,
}

/// Evaluate one event against the item's current state and cache. Pure:
/// depends only on its three inputs, never on wall-clock time or I/O.
pub fn evaluate(event: &Event, state: &PerItemState, cache: &PerItemCacheEntry) -> EvalOutcome {
    let ts = event.timestamp;
    let candidates = candidates::select(ts, cache);
    let effective_bias = decay::effective_bias(state, ts);
    let mut new_state = state.clone();

    let has_anomaly_reference = candidates.supplier_eligible
        && candidates.supplier_price.map(|p| p > 0).unwrap_or(false);

    let (final_price_cents, decision, flags) = match (event.source, event.outcome) {
        (Source::Human, Outcome::QuoteAccepted) => {
            let anomaly = has_anomaly_reference
                && circuit_breaker::is_anomaly(event.price_cents, candidates.supplier_price.unwrap());

            if !anomaly {
                if has_anomaly_reference {
                    learning::learn(&mut new_state, event.price_cents, candidates.supplier_price.unwrap());
                }
                (event.price_cents, DecisionTag::HumanAccepted, Vec::new())
            } else {
                let (price, _tag, mut flags) = fallback::fallback(&candidates, effective_bias);
                flags.push(Flag::AnomalyRejected);
                (price, DecisionTag::AnomalyRejected, flags)
            }
        }
        (Source::Human, Outcome::QuoteRejected) => fallback::fallback(&candidates, effective_bias),
        _ => fallback::fallback(&candidates, effective_bias),
    };

    new_state.last_updated_ts = ts;

    EvalOutcome { final_price_cents, decision, flags, state: new_state }
}
