//! Stable ordering helpers shared by anything that must process a
//! collection in a fixed, reproducible sequence.

use std::cmp::Ordering;

/// Types participating in a deterministic walk expose a total order key.
pub trait StableOrd {
    type Key: Ord;
    fn stable_key(&self) -> Self::Key;
}

impl StableOrd for crate::event::Event {
    type Key = (i64, String);
    fn stable_key(&self) -> Self::Key {
        (self.timestamp, self.event_id.as_str().to_string())
    }
}

/// Sort events ascending by `(timestamp, event_id)`, stably.
pub fn sort_events(events: &mut [crate::event::Event]) {
    events.sort_by(|a, b| cmp_events(a, b));
}

fn cmp_events(a: &crate::event::Event, b: &crate::event::Event) -> Ordering {
    match a.timestamp.cmp(&b.timestamp) {
        Ordering::Equal => a.event_id.as_str().cmp(b.event_id.as_str()),
        o => o,
    }
}
