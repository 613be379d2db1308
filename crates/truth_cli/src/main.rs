//! truth-engine — CLI entrypoint.
//! Drives one pipeline run (or replay) end to end. Strictly offline and
//! deterministic: no network, no OS RNG, no environment-driven behavior
//! beyond `RUST_LOG`.

mod args;
mod config;
mod logging;

use std::process::ExitCode;

use args::{parse_and_validate, CliError, Cli, Command};
use config::RunConfig;
use truth_pipeline::PipelineError;

fn main() -> ExitCode {
    logging::init();

    let cli = match parse_and_validate() {
        Ok(c) => c,
        Err(e) => return fatal_cli(&e),
    };

    let config = RunConfig::from_command(&cli.command);
    match dispatch(cli, &config) {
        Ok(code) => code,
        Err(e) => fatal_pipeline(&e),
    }
}

fn dispatch(cli: Cli, config: &RunConfig) -> Result<ExitCode, PipelineError> {
    match cli.command {
        Command::Run { events, state, audit, .. } => {
            let engine_state = truth_io::state_store::load(&state)?;
            let stream = truth_io::events::read_jsonl(&events)?;
            let report = truth_pipeline::run(stream, engine_state, &state, &audit)?;

            config.report("truth-engine: run complete");
            config.report(format!("truth-engine: events_processed={}", report.events_processed));
            config.report(format!(
                "truth-engine: events_skipped_duplicate={}",
                report.events_skipped_duplicate
            ));
            config.report(format!("truth-engine: state_hash={}", report.final_state_hash));
            Ok(RunConfig::ok())
        }
        Command::Replay { events, state, audit, verify, .. } => {
            let expected = std::fs::read_to_string(&verify)
                .map_err(truth_io::IoError::from)?
                .trim()
                .to_string();
            let stream = truth_io::events::read_jsonl(&events)?;

            match truth_pipeline::verify(stream, &state, &audit, &expected) {
                Ok(report) => {
                    config.report("truth-engine: replay verified");
                    config.report(format!("truth-engine: state_hash={}", report.run.final_state_hash));
                    Ok(RunConfig::ok())
                }
                Err(PipelineError::ReplayMismatch { expected, actual }) => {
                    eprintln!("truth-engine: error: REPLAY_MISMATCH: expected {expected}, got {actual}");
                    Ok(RunConfig::replay_mismatch())
                }
                Err(other) => Err(other),
            }
        }
    }
}

fn fatal_cli(e: &CliError) -> ExitCode {
    eprintln!("truth-engine: error: INVALID_ARGS: {e}");
    RunConfig::error()
}

fn fatal_pipeline(e: &PipelineError) -> ExitCode {
    let kind = match e {
        PipelineError::Io(io) => match io {
            truth_io::IoError::StateCorrupt { .. } => "STATE_CORRUPT",
            _ => "IO_ERROR",
        },
        PipelineError::InvalidEvent { .. } => "INVALID_EVENT",
        PipelineError::OutOfOrder { .. } => "OUT_OF_ORDER",
        PipelineError::ReplayMismatch { .. } => "REPLAY_MISMATCH",
    };
    eprintln!("truth-engine: error: {kind}: {e}");
    RunConfig::error()
}
