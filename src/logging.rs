//! Diagnostic logging for get-diff.
//!
//! Logs go to stderr so stdout stays reserved for workflow commands. The
//! filter comes from `GET_DIFF_LOG` (e.g. `debug` to see every git command,
//! `trace` to also see their output) and defaults to `info`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_ENV: &str = "GET_DIFF_LOG";
const DEFAULT_LEVEL: &str = "info";

/// Initialize tracing for the application.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
