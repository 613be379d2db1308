//! `tracing-subscriber` initialization. The sole CLI entrypoint that wires
//! the `tracing` facade to an actual sink; crates below this one only
//! depend on the facade.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber with verbosity driven by `RUST_LOG`
/// (defaults to `info` when unset or unparsable).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
