//! The input record type: one priced observation of an item, from one of
//! three sources, optionally carrying a human decision on a quote.
//!
//! Wire tokens are explicit via `#[serde(rename = ...)]`, never derived
//! from the Rust variant's name, so a rename of a Rust identifier never
//! silently changes the on-disk/wire format.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ids::{EventId, ItemId};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Source {
    #[cfg_attr(feature = "serde", serde(rename = "HISTORIC"))]
    Historic,
    #[cfg_attr(feature = "serde", serde(rename = "SUPPLIER"))]
    Supplier,
    #[cfg_attr(feature = "serde", serde(rename = "HUMAN"))]
    Human,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    #[cfg_attr(feature = "serde", serde(rename = "NONE"))]
    None,
    #[cfg_attr(feature = "serde", serde(rename = "QUOTE_ACCEPTED"))]
    QuoteAccepted,
    #[cfg_attr(feature = "serde", serde(rename = "QUOTE_REJECTED"))]
    QuoteRejected,
}

/// One line of `events.jsonl`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Event {
    pub event_id: EventId,
    pub item_id: ItemId,
    pub timestamp: i64,
    pub source: Source,
    pub price_cents: i64,
    pub outcome: Outcome,
}

impl Event {
    /// The `(timestamp, event_id)` pair that totally orders the processed
    /// stream: stable sort by timestamp, ties broken lexicographically by
    /// event id.
    pub fn order_key(&self) -> (i64, &str) {
        (self.timestamp, self.event_id.as_str())
    }
}
