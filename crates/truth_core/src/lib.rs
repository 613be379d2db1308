//! truth_core — event/state types, integer rounding, and deterministic
//! ordering for the pricing engine.
//!
//! This crate is **I/O-free**. It defines the stable types shared across
//! the workspace (`truth_io`, `truth_rules`, `truth_pipeline`, `truth_cli`):
//!
//! - Opaque identifiers: `EventId`, `ItemId`
//! - The event record and its fixed-vocabulary enums (`Source`, `Outcome`)
//! - Persisted and ephemeral state (`EngineState`, `PerItemState`,
//!   `PerItemCacheEntry`)
//! - Integer-only rounding (`floor_div`, `median_int`)
//!
//! Serialization derives are gated behind the `serde` feature.

pub mod determinism;
pub mod errors;
pub mod event;
pub mod ids;
pub mod rounding;
pub mod state;

pub use determinism::{sort_events, StableOrd};
pub use errors::CoreError;
pub use event::{Event, Outcome, Source};
pub use ids::{EventId, ItemId};
pub use rounding::{floor_div, median_int};
pub use state::{EngineState, HashedPayload, Observation, PerItemCacheEntry, PerItemState};
