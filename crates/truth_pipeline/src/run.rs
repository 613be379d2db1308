//! Event Pipeline: drives a sorted, deduplicated event stream through the
//! rule evaluator, committing state and emitting one audit line per
//! processed event.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use truth_core::event::{Event, Outcome, Source};
use truth_core::ids::{EventId, ItemId};
use truth_core::state::EngineState;
use truth_io::events::EventParseError;
use truth_io::{audit_log, hasher, state_store};
use truth_rules::{DecisionTag, Flag};

use crate::cache::PerItemCache;
use crate::error::{PipelineError, PipelineResult};
use crate::validate;

/// One line of `audit_log.jsonl`.
#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord {
    pub event_id: EventId,
    pub item_id: ItemId,
    pub timestamp: i64,
    pub source: Source,
    pub outcome: Outcome,
    pub final_price_cents: i64,
    pub decision: DecisionTag,
    pub flags: Vec<Flag>,
    pub bias_cents_after: i64,
    pub state_hash_after: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub events_processed: usize,
    pub events_skipped_duplicate: usize,
    pub final_state_hash: String,
}

/// Process every event in `events` against `state`, writing one audit line
/// per non-duplicate event to `audit_path` and the final state to
/// `state_path`. The iterator is consumed once and fully in order to sort
/// it; reading itself stays lazy and bounded to one line at a time.
pub fn run<I>(events: I, mut state: EngineState, state_path: &Path, audit_path: &Path) -> PipelineResult<RunReport>
where
    I: Iterator<Item = Result<(usize, Event), EventParseError>>,
{
    let mut parsed: Vec<(usize, Event)> = Vec::new();
    for item in events {
        match item {
            Ok(pair) => parsed.push(pair),
            Err(e) => return Err(PipelineError::InvalidEvent { line: e.line, reason: e.message }),
        }
    }

    parsed.sort_by(|(_, a), (_, b)| a.timestamp.cmp(&b.timestamp).then_with(|| a.event_id.as_str().cmp(b.event_id.as_str())));

    let mut last_ts = i64::MIN;
    let mut cache = PerItemCache::new();
    let mut report = RunReport::default();

    for (line, event) in &parsed {
        if event.timestamp < last_ts {
            return Err(PipelineError::OutOfOrder { at_line: *line });
        }
        last_ts = event.timestamp;

        if state.has_seen(&event.event_id) {
            report.events_skipped_duplicate += 1;
            warn!(event_id = %event.event_id, "skipping duplicate event");
            continue;
        }

        if let Err(reason) = validate::validate(event) {
            return Err(PipelineError::InvalidEvent { line: *line, reason });
        }

        cache.observe(event);
        let cache_entry = cache.entry_for(&event.item_id);
        let item_state = state.item_or_new(&event.item_id).clone();

        let outcome = truth_rules::evaluate(event, &item_state, &cache_entry);

        let bias_cents_after = outcome.state.bias_cents;
        state.items.insert(event.item_id.clone(), outcome.state);
        state.seen_event_ids.insert(event.event_id.clone());

        let payload_bytes = truth_io::canonical_json::to_canonical_bytes(&state.hashed_payload())?;
        let state_hash_after = hasher::sha256_hex(&payload_bytes);
        state.state_hash = state_hash_after.clone();

        debug!(
            event_id = %event.event_id,
            decision = ?outcome.decision,
            final_price_cents = outcome.final_price_cents,
            "processed event"
        );

        let record = AuditRecord {
            event_id: event.event_id.clone(),
            item_id: event.item_id.clone(),
            timestamp: event.timestamp,
            source: event.source,
            outcome: event.outcome,
            final_price_cents: outcome.final_price_cents,
            decision: outcome.decision,
            flags: outcome.flags,
            bias_cents_after,
            state_hash_after,
        };
        audit_log::append(audit_path, &record)?;

        report.events_processed += 1;
    }

    state_store::save(state_path, &mut state)?;
    report.final_state_hash = state.state_hash.clone();

    info!(
        events_processed = report.events_processed,
        events_skipped_duplicate = report.events_skipped_duplicate,
        final_state_hash = %report.final_state_hash,
        "run finished"
    );

    Ok(report)
}
