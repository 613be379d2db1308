//! End-to-end exercise of the six concrete pricing scenarios, plus a
//! determinism check that running the same history twice produces
//! byte-identical state and audit output.

use truth_core::event::{Event, Outcome, Source};
use truth_core::state::EngineState;
use truth_pipeline::run;

fn ev(id: &str, item: &str, ts: i64, source: Source, price: i64, outcome: Outcome) -> (usize, Event) {
    (
        0,
        Event {
            event_id: id.parse().unwrap(),
            item_id: item.parse().unwrap(),
            timestamp: ts,
            source,
            price_cents: price,
            outcome,
        },
    )
}

#[test]
fn full_history_across_historic_supplier_and_human_events() {
    let dir = tempfile::tempdir().unwrap();
    let state_path = dir.path().join("rules_state.json");
    let audit_path = dir.path().join("audit_log.jsonl");

    let events = vec![
        Ok(ev("e1", "P1", 0, Source::Historic, 10000, Outcome::None)),
        Ok(ev("e2", "P1", 1000, Source::Supplier, 10200, Outcome::None)),
        Ok(ev("e3", "P1", 2000, Source::Historic, 10100, Outcome::None)),
        Ok(ev("e4", "P1", 3000, Source::Human, 10500, Outcome::QuoteAccepted)),
        Ok(ev("e5", "P1", 4000, Source::Human, 16000, Outcome::QuoteAccepted)),
        Ok(ev("e6", "P1", 3000 + 604_802, Source::Historic, 11000, Outcome::None)),
    ];

    let report = run(events.into_iter(), EngineState::empty(), &state_path, &audit_path).unwrap();
    assert_eq!(report.events_processed, 6);

    let audit: Vec<serde_json::Value> = std::fs::read_to_string(&audit_path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(audit[3]["decision"], "HUMAN_ACCEPTED");
    assert_eq!(audit[3]["bias_cents_after"], 300);
    assert_eq!(audit[4]["decision"], "ANOMALY_REJECTED");
    assert!(audit[4]["flags"].as_array().unwrap().iter().any(|f| f == "ANOMALY_REJECTED"));

    let final_state: serde_json::Value = serde_json::from_slice(&std::fs::read(&state_path).unwrap()).unwrap();
    assert_eq!(final_state["state_hash"], audit.last().unwrap()["state_hash_after"]);
}

#[test]
fn running_the_same_history_twice_is_byte_identical() {
    let dir1 = tempfile::tempdir().unwrap();
    let dir2 = tempfile::tempdir().unwrap();

    let make_events = || {
        vec![
            Ok(ev("e1", "P1", 0, Source::Historic, 10000, Outcome::None)),
            Ok(ev("e2", "P1", 1000, Source::Supplier, 10200, Outcome::None)),
            Ok(ev("e3", "P2", 1500, Source::Historic, 5000, Outcome::None)),
            Ok(ev("e4", "P1", 3000, Source::Human, 10500, Outcome::QuoteAccepted)),
        ]
        .into_iter()
    };

    let r1 = run(make_events(), EngineState::empty(), &dir1.path().join("s.json"), &dir1.path().join("a.jsonl")).unwrap();
    let r2 = run(make_events(), EngineState::empty(), &dir2.path().join("s.json"), &dir2.path().join("a.jsonl")).unwrap();

    assert_eq!(r1.final_state_hash, r2.final_state_hash);
    assert_eq!(
        std::fs::read(dir1.path().join("s.json")).unwrap(),
        std::fs::read(dir2.path().join("s.json")).unwrap()
    );
    assert_eq!(
        std::fs::read(dir1.path().join("a.jsonl")).unwrap(),
        std::fs::read(dir2.path().join("a.jsonl")).unwrap()
    );
}

#[test]
fn resuming_from_a_saved_state_skips_already_seen_events() {
    let dir = tempfile::tempdir().unwrap();
    let state_path = dir.path().join("rules_state.json");
    let audit_path = dir.path().join("audit_log.jsonl");

    let first_pass = vec![Ok(ev("e1", "P1", 0, Source::Historic, 10000, Outcome::None))];
    let report1 = run(first_pass.into_iter(), EngineState::empty(), &state_path, &audit_path).unwrap();
    assert_eq!(report1.events_processed, 1);

    let resumed_state = truth_io::state_store::load(&state_path).unwrap();
    let second_pass = vec![
        Ok(ev("e1", "P1", 0, Source::Historic, 10000, Outcome::None)),
        Ok(ev("e2", "P1", 1000, Source::Supplier, 10200, Outcome::None)),
    ];
    let report2 = run(second_pass.into_iter(), resumed_state, &state_path, &audit_path).unwrap();
    assert_eq!(report2.events_processed, 1);
    assert_eq!(report2.events_skipped_duplicate, 1);

    let audit_contents = std::fs::read_to_string(&audit_path).unwrap();
    assert_eq!(audit_contents.lines().count(), 2);
}
