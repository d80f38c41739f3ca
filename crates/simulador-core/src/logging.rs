//! Structured logging setup.
//!
//! Logs are JSON lines on stderr so stdout stays reserved for user output.
//! Every event carries an `event = "<layer>.<area>.<action>"` field.

use tracing_subscriber::EnvFilter;

/// Install the global JSON subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the filter is `info`, or `error`
/// when `quiet` is set. Calling this twice keeps the first subscriber.
pub fn init_logging(quiet: bool) {
    let default_level = if quiet { "error" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
