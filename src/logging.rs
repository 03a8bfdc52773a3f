use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber.
///
/// Diagnostics go to stderr so stdout carries only the report. `RUST_LOG`
/// overrides the default level; `verbose` raises it to `info`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}
