//! Logging setup.
//!
//! `DOMINAR_LOG` takes a `tracing_subscriber::EnvFilter` directive, for example
//! `DOMINAR_LOG=dominar::curve=debug`. Without it the level follows `-v`/`-q`.
//! Logs go to stderr so stdout carries only command output.

use crate::config::Verbosity;
use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "DOMINAR_LOG";

static INIT: Once = Once::new();

/// Build the filter for `verbosity`, preferring `DOMINAR_LOG` when it parses
#[must_use]
pub fn log_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(verbosity: Verbosity, use_color: bool) {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(use_color)
                    .with_target(verbosity == Verbosity::Debug),
            )
            .with(log_filter(verbosity))
            .try_init();
    });
}
