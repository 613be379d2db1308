//! Append-only audit log writer.
//!
//! The concrete audit record shape (decision tags, flags) lives above this
//! crate in the pipeline layer; this module only knows how to append one
//! more canonical JSON line to a file, durably.

use std::path::Path;

use serde::Serialize;

use crate::canonical_json::append_canonical_line;
use crate::IoError;

/// Append one record as a canonical JSON line, creating the file if absent.
pub fn append<T: Serialize>(path: &Path, record: &T) -> Result<(), IoError> {
    append_canonical_line(path, record)
}
