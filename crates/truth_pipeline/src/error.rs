//! Pipeline-level error kinds: wraps `truth_io::IoError` and adds the
//! failure modes specific to orchestrating a run.

use thiserror::Error;
use truth_io::IoError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error("invalid event at line {line}: {reason}")]
    InvalidEvent { line: usize, reason: String },

    #[error("events observed out of order at line {at_line}")]
    OutOfOrder { at_line: usize },

    #[error("replay mismatch: expected {expected}, got {actual}")]
    ReplayMismatch { expected: String, actual: String },
}

pub type PipelineResult<T> = Result<T, PipelineError>;
