//! Persisted and ephemeral engine state.
//!
//! `EngineState` is the persisted root; `PerItemCacheEntry` is rebuilt from
//! nothing on every run and never serialized — it has no `Serialize` derive
//! at all, so a future refactor can't accidentally leak it into
//! `rules_state.json`.

use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ids::{EventId, ItemId};
use crate::rounding::median_int;

/// The delta window never holds more than this many entries:
/// `|accepted_human_deltas_cents| ≤ 5`.
pub const MAX_DELTA_WINDOW: usize = 5;

/// Current schema tag for `EngineState.version`. Bumped only on an
/// incompatible change to the persisted shape.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// A single priced observation cached per item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Observation {
    pub price_cents: i64,
    pub timestamp: i64,
}

/// Ephemeral, rebuilt-per-run cache slot for one item. Never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PerItemCacheEntry {
    pub latest_historic: Option<Observation>,
    pub latest_supplier: Option<Observation>,
}

/// Per-item learning state, persisted under `items` in `EngineState`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerItemState {
    pub last_updated_ts: i64,
    pub accepted_human_deltas_cents: Vec<i64>,
    pub bias_cents: i64,
}

impl PerItemState {
    pub fn new() -> Self {
        Self {
            last_updated_ts: 0,
            accepted_human_deltas_cents: Vec::new(),
            bias_cents: 0,
        }
    }

    /// Rule C: append `delta`, evict the oldest entry past the window bound,
    /// and recompute `bias_cents` as the integer median of what remains.
    pub fn record_accepted_delta(&mut self, delta: i64) {
        self.accepted_human_deltas_cents.push(delta);
        while self.accepted_human_deltas_cents.len() > MAX_DELTA_WINDOW {
            self.accepted_human_deltas_cents.remove(0);
        }
        self.bias_cents = median_int(&self.accepted_human_deltas_cents);
    }
}

/// The persisted root of the engine's learned state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineState {
    pub version: u32,
    pub items: BTreeMap<ItemId, PerItemState>,
    pub seen_event_ids: BTreeSet<EventId>,
    pub state_hash: String,
}

impl EngineState {
    /// A fresh, empty state — what the state store returns when no file
    /// exists yet.
    pub fn empty() -> Self {
        Self {
            version: CURRENT_SCHEMA_VERSION,
            items: BTreeMap::new(),
            seen_event_ids: BTreeSet::new(),
            state_hash: String::new(),
        }
    }

    pub fn has_seen(&self, id: &EventId) -> bool {
        self.seen_event_ids.contains(id)
    }

    pub fn item_or_new(&mut self, item_id: &ItemId) -> &mut PerItemState {
        self.items.entry(item_id.clone()).or_insert_with(PerItemState::new)
    }
}

/// The subset of `EngineState` that is actually hashed: `state_hash` is
/// excluded from its own fingerprint's payload.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HashedPayload<'a> {
    pub version: u32,
    pub items: &'a BTreeMap<ItemId, PerItemState>,
    pub seen_event_ids: &'a BTreeSet<EventId>,
}

impl EngineState {
    pub fn hashed_payload(&self) -> HashedPayload<'_> {
        HashedPayload {
            version: self.version,
            items: &self.items,
            seen_event_ids: &self.seen_event_ids,
        }
    }
}
