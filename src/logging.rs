//! Tracing subscriber setup for the binary
//!
//! The library only emits `tracing` events. The binary installs one fmt
//! subscriber writing to stderr so stdout stays clean for tree and JSON
//! output.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Filter directive for a `-v` count and the configured verbosity.
///
/// Any `-v` on the command line wins over the config file.
pub fn filter_directive(verbose: u8, verbosity: Verbosity) -> &'static str {
    match verbose {
        0 => match verbosity {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        },
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the computed level.
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init(verbose: u8, verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
