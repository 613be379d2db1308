//! Orchestration layer: wires the event reader, the per-item cache, the
//! rule evaluator and the state store into one run, and offers a replay
//! check on top for proving a history reproduces its recorded hash.

pub mod cache;
pub mod error;
pub mod replay;
pub mod run;
pub mod validate;

pub use error::{PipelineError, PipelineResult};
pub use replay::{verify, ReplayReport};
pub use run::{run, AuditRecord, RunReport};
