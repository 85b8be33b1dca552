//! Diagnostic logging on stderr.
//!
//! stdout carries the report (human-readable or JSON), so log output never goes
//! there.

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_LEVEL: &str = "warn";

/// Choose the log filter from the CLI flags.
///
/// `quiet` wins over `verbose`; without either, `RUST_LOG` is honoured and
/// falls back to `default_level`.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }

    if verbose > 0 {
        let level = match verbose {
            1 => "debug",
            _ => "trace",
        };
        return EnvFilter::new(level);
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(quiet: bool, verbose: u8) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(env_filter(quiet, verbose, DEFAULT_LEVEL))
        .with(layer)
        .try_init();
}
