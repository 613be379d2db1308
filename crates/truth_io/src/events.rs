//! Lazy line-by-line reader for `events.jsonl`.
//!
//! One JSON object per line. Reading is pull-based — nothing is buffered
//! beyond the current line — so the pipeline can process an arbitrarily
//! long stream without holding it all in memory. Every item, parsed or
//! not, carries its 1-based source line number so callers can report
//! `INVALID_EVENT` at the right line without a second pass over the file.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use truth_core::Event;

use crate::IoError;

/// A line that failed to parse into an `Event`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventParseError {
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for EventParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for EventParseError {}

/// Open `path` and return a lazy iterator over `(line_number, event)`.
pub fn read_jsonl(
    path: &Path,
) -> Result<impl Iterator<Item = Result<(usize, Event), EventParseError>>, IoError> {
    let file = File::open(path).map_err(IoError::from)?;
    let reader = BufReader::new(file);
    Ok(JsonlEvents { lines: reader.lines(), line_no: 0 })
}

struct JsonlEvents {
    lines: io::Lines<BufReader<File>>,
    line_no: usize,
}

impl Iterator for JsonlEvents {
    type Item = Result<(usize, Event), EventParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = self.lines.next()?;
            self.line_no += 1;
            let line = match raw {
                Ok(l) => l,
                Err(e) => {
                    return Some(Err(EventParseError { line: self.line_no, message: e.to_string() }))
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            let line_no = self.line_no;
            return Some(
                serde_json::from_str::<Event>(&line)
                    .map(|event| (line_no, event))
                    .map_err(|e| EventParseError { line: line_no, message: e.to_string() }),
            );
        }
    }
}
