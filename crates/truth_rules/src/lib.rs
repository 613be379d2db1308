//! truth_rules — pure rule-evaluation layer.
//!
//! One module per rule family: candidate selection, time decay, the shared
//! fallback function, the circuit breaker, bias learning, and the decision
//! tree tying them together. `evaluate` is the single entry point the
//! pipeline calls once per event; every function here is a pure function of
//! its arguments — no I/O, no fallible operations, no catch-all variants.

#![forbid(unsafe_code)]

pub mod candidates;
pub mod circuit_breaker;
pub mod decay;
pub mod decision;
pub mod decision_tree;
pub mod fallback;
pub mod learning;

pub use candidates::Candidates;
pub use decision::{DecisionTag, Flag};
pub use decision_tree::{evaluate, EvalOutcome};
