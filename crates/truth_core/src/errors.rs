//! Minimal error set for core-domain validation & parsing.
//!
//! Kept as a plain enum with a hand-written `Display` (no `thiserror`) so
//! this crate can stay dependency-light; heavier crates up the stack wrap
//! this in their own richer error types.

use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CoreError {
    EmptyId,
    IdTooLong,
    InvalidIdChar,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::EmptyId => write!(f, "id must not be empty"),
            CoreError::IdTooLong => write!(f, "id exceeds maximum length"),
            CoreError::InvalidIdChar => write!(f, "id contains a disallowed character"),
        }
    }
}

impl std::error::Error for CoreError {}
