//! Deterministic, offline CLI argument parsing & validation.
//! - No networked paths (reject http/https schemes)
//! - `run` writes state/audit in place; `replay` starts from empty state
//!   and checks the result against a hash file

use clap::{Parser, Subcommand};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Parser)]
#[command(name = "truth-engine", about = "Deterministic pricing engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process events against an on-disk state, overwriting it.
    Run {
        #[arg(long)]
        events: PathBuf,
        #[arg(long)]
        state: PathBuf,
        #[arg(long)]
        audit: PathBuf,
        #[arg(long)]
        quiet: bool,
    },
    /// Re-run events from empty state and check against a recorded hash.
    Replay {
        #[arg(long)]
        events: PathBuf,
        #[arg(long)]
        state: PathBuf,
        #[arg(long)]
        audit: PathBuf,
        #[arg(long)]
        verify: PathBuf,
        #[arg(long)]
        quiet: bool,
    },
}

#[derive(Debug)]
pub enum CliError {
    NonLocalPath(String),
    NotFound(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::NonLocalPath(p) => write!(f, "path must be local file (no scheme): {}", p),
            CliError::NotFound(p) => write!(f, "file not found: {}", p),
        }
    }
}

impl std::error::Error for CliError {}

/// Parse `std::env::args()` and validate that every input path is local
/// and exists; `--state` for `run` is allowed to be absent (treated as
/// empty state by the pipeline).
pub fn parse_and_validate() -> Result<Cli, CliError> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Run { events, .. } => {
            ensure_local_exists(events, "--events")?;
        }
        Command::Replay { events, verify, .. } => {
            ensure_local_exists(events, "--events")?;
            ensure_local_exists(verify, "--verify")?;
        }
    }

    Ok(cli)
}

fn ensure_local_exists(p: &Path, label: &'static str) -> Result<(), CliError> {
    let s = p.to_string_lossy().to_string();
    if has_scheme(&s) {
        return Err(CliError::NonLocalPath(format!("{} {}", label, s)));
    }
    let meta = fs::metadata(p).map_err(|_| CliError::NotFound(format!("{} {}", label, s)))?;
    if !meta.is_file() {
        return Err(CliError::NotFound(format!("{} {}", label, s)));
    }
    Ok(())
}

fn has_scheme(s: &str) -> bool {
    s.contains("://") || s.starts_with("http:") || s.starts_with("https:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_local_path_detection() {
        assert!(has_scheme("http://x"));
        assert!(has_scheme("scheme://x"));
        assert!(!has_scheme(r"/tmp/file.json"));
    }
}
