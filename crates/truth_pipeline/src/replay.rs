//! Replay Verifier: re-runs a full event history from an empty state into
//! fresh output paths and checks the resulting state hash against an
//! expected value, to prove the pipeline is deterministic end to end.

use std::path::Path;

use truth_core::event::Event;
use truth_core::state::EngineState;
use truth_io::events::EventParseError;

use crate::error::{PipelineError, PipelineResult};
use crate::run::{run, RunReport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    pub run: RunReportSummary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReportSummary {
    pub events_processed: usize,
    pub events_skipped_duplicate: usize,
    pub final_state_hash: String,
}

impl From<RunReport> for RunReportSummary {
    fn from(r: RunReport) -> Self {
        Self {
            events_processed: r.events_processed,
            events_skipped_duplicate: r.events_skipped_duplicate,
            final_state_hash: r.final_state_hash,
        }
    }
}

/// Re-run `events` from scratch into `state_path`/`audit_path` and confirm
/// the resulting state hash matches `expected_hash`.
pub fn verify<I>(events: I, state_path: &Path, audit_path: &Path, expected_hash: &str) -> PipelineResult<ReplayReport>
where
    I: Iterator<Item = Result<(usize, Event), EventParseError>>,
{
    let report = run(events, EngineState::empty(), state_path, audit_path)?;

    if report.final_state_hash != expected_hash {
        return Err(PipelineError::ReplayMismatch {
            expected: expected_hash.to_string(),
            actual: report.final_state_hash,
        });
    }

    Ok(ReplayReport { run: report.into() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use truth_core::event::{Outcome, Source};

    fn ev(id: &str, ts: i64, source: Source, price: i64, outcome: Outcome) -> (usize, Event) {
        (
            0,
            Event { event_id: id.parse().unwrap(), item_id: "P1".parse().unwrap(), timestamp: ts, source, price_cents: price, outcome },
        )
    }

    #[test]
    fn matching_hash_verifies_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let events = vec![Ok(ev("e1", 0, Source::Historic, 10000, Outcome::None))];
        let baseline = run(
            events.clone().into_iter(),
            EngineState::empty(),
            &dir.path().join("baseline_state.json"),
            &dir.path().join("baseline_audit.jsonl"),
        )
        .unwrap();

        let report = verify(
            events.into_iter(),
            &dir.path().join("replay_state.json"),
            &dir.path().join("replay_audit.jsonl"),
            &baseline.final_state_hash,
        )
        .unwrap();

        assert_eq!(report.run.final_state_hash, baseline.final_state_hash);
    }

    #[test]
    fn mismatched_hash_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let events = vec![Ok(ev("e1", 0, Source::Historic, 10000, Outcome::None))];

        let err = verify(
            events.into_iter(),
            &dir.path().join("replay_state.json"),
            &dir.path().join("replay_audit.jsonl"),
            "0000000000000000000000000000000000000000000000000000000000000000",
        )
        .unwrap_err();

        assert!(matches!(err, PipelineError::ReplayMismatch { .. }));
    }
}
