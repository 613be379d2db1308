//! The few tunables that vary per invocation, pulled out of the parsed
//! `Command` once: output exit codes, and whether `--quiet` suppresses the
//! summary line.

use std::process::ExitCode;

use crate::args::Command;

const EXIT_OK: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_REPLAY_MISMATCH: u8 = 2;

#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    pub quiet: bool,
}

impl RunConfig {
    pub fn from_command(command: &Command) -> Self {
        let quiet = match command {
            Command::Run { quiet, .. } => *quiet,
            Command::Replay { quiet, .. } => *quiet,
        };
        Self { quiet }
    }

    /// Prints `line` unless `--quiet` was given.
    pub fn report(&self, line: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", line.as_ref());
        }
    }

    pub fn ok() -> ExitCode {
        ExitCode::from(EXIT_OK)
    }

    pub fn error() -> ExitCode {
        ExitCode::from(EXIT_ERROR)
    }

    pub fn replay_mismatch() -> ExitCode {
        ExitCode::from(EXIT_REPLAY_MISMATCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_flag_is_pulled_from_either_variant() {
        let run = Command::Run {
            events: "e".into(),
            state: "s".into(),
            audit: "a".into(),
            quiet: true,
        };
        assert!(RunConfig::from_command(&run).quiet);

        let replay = Command::Replay {
            events: "e".into(),
            state: "s".into(),
            audit: "a".into(),
            verify: "v".into(),
            quiet: false,
        };
        assert!(!RunConfig::from_command(&replay).quiet);
    }
}
