//! Canonical JSON encoding.
//!
//! - Objects: keys sorted lexicographically (UTF-8 codepoint order).
//! - Arrays: order preserved — the caller is responsible for ordering.
//! - Output: compact (no extra whitespace, no trailing newline).
//! - Atomic write: temp file in the same directory + `sync_all` + `rename`;
//!   best-effort directory fsync on Unix. If `rename` fails (cross-device),
//!   falls back to a direct truncate-write of the target.

#![allow(clippy::needless_borrow)]

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::IoError;

/// Serialize any `Serialize` value to canonical JSON bytes.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, IoError> {
    let v = serde_json::to_value(value)?;
    let mut out = Vec::with_capacity(256);
    write_canonical_value(&v, &mut out);
    Ok(out)
}

fn write_canonical_value(v: &Value, out: &mut Vec<u8>) {
    match v {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(b) => out.extend_from_slice(if *b { b"true" } else { b"false" }),
        Value::Number(n) => out.extend_from_slice(n.to_string().as_bytes()),
        Value::String(s) => {
            let quoted = serde_json::to_string(s).expect("string encoding cannot fail");
            out.extend_from_slice(quoted.as_bytes());
        }
        Value::Array(arr) => {
            out.push(b'[');
            for (i, elem) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_canonical_value(elem, out);
            }
            out.push(b']');
        }
        Value::Object(map) => {
            out.push(b'{');
            let mut keys: Vec<&str> = map.keys().map(|k| k.as_str()).collect();
            keys.sort_unstable();
            for (i, k) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                let quoted_key = serde_json::to_string(k).expect("key encoding cannot fail");
                out.extend_from_slice(quoted_key.as_bytes());
                out.push(b':');
                write_canonical_value(&map[*k], out);
            }
            out.push(b'}');
        }
    }
}

/// Write canonical JSON bytes of `value` to `path` atomically.
pub fn write_canonical_file<T: Serialize>(path: &Path, value: &T) -> Result<(), IoError> {
    let bytes = to_canonical_bytes(value)?;

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(IoError::from)?;

    let tmp = make_unique_tmp_path(path);
    let mut tf = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp)
        .map_err(IoError::from)?;

    tf.write_all(&bytes).map_err(IoError::from)?;
    tf.sync_all().map_err(IoError::from)?;
    drop(tf);

    match fs::rename(&tmp, path) {
        Ok(()) => {
            let _ = fsync_dir(parent);
            Ok(())
        }
        Err(_) => {
            tracing::debug!(path = %path.display(), "rename failed, falling back to direct write");
            let result: io::Result<()> = (|| {
                let mut f = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(path)?;
                f.write_all(&bytes)?;
                f.sync_all()
            })();

            if let Err(err) = result {
                let _ = fs::remove_file(&tmp);
                return Err(IoError::from(err));
            }
            let _ = fs::remove_file(&tmp);
            let _ = fsync_dir(parent);
            Ok(())
        }
    }
}

/// Append one canonical-JSON-encoded line (plus `\n`) to `path`, creating it
/// if absent. Used by the audit log, which is append-only rather than
/// rewritten wholesale per event.
pub fn append_canonical_line<T: Serialize>(path: &Path, value: &T) -> Result<(), IoError> {
    let mut bytes = to_canonical_bytes(value)?;
    bytes.push(b'\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(IoError::from)?;
    }

    let mut f = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(IoError::from)?;
    f.write_all(&bytes).map_err(IoError::from)?;
    f.sync_all().map_err(IoError::from)
}

fn make_unique_tmp_path(target: &Path) -> PathBuf {
    use std::ffi::OsString;
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let pid = std::process::id();
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);

    let fname = target.file_name().and_then(|s| s.to_str()).unwrap_or("file");
    let tmp_name: OsString = OsString::from(format!("{fname}.{pid}.{n}.tmp"));

    match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(tmp_name),
        _ => PathBuf::from(tmp_name),
    }
}

#[cfg(unix)]
fn fsync_dir(dir: &Path) -> io::Result<()> {
    let df = OpenOptions::new().read(true).open(dir)?;
    df.sync_all()
}

#[cfg(not(unix))]
#[inline]
fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
