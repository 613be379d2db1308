//! Per-item cache: rebuilt from nothing at the start of every run, owned
//! exclusively by the pipeline for that run's duration.

use std::collections::HashMap;

use truth_core::event::{Event, Source};
use truth_core::ids::ItemId;
use truth_core::state::{Observation, PerItemCacheEntry};

#[derive(Debug, Default)]
pub struct PerItemCache {
    slots: HashMap<ItemId, PerItemCacheEntry>,
}

impl PerItemCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditionally overwrite the relevant slot for `event`'s item when
    /// its source is HISTORIC or SUPPLIER. HUMAN events never update the
    /// cache.
    pub fn observe(&mut self, event: &Event) {
        let observation = Observation { price_cents: event.price_cents, timestamp: event.timestamp };
        let entry = self.slots.entry(event.item_id.clone()).or_default();
        match event.source {
            Source::Historic => entry.latest_historic = Some(observation),
            Source::Supplier => entry.latest_supplier = Some(observation),
            Source::Human => {}
        }
    }

    pub fn entry_for(&self, item_id: &ItemId) -> PerItemCacheEntry {
        self.slots.get(item_id).copied().unwrap_or_default()
    }
}
