//! Tracing setup for the binaries.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{DEFAULT_LOG_FILTER, ENV_LOG};

static INIT: Once = Once::new();

/// Install the global subscriber, writing to stderr.
///
/// `LIARS_ODDS_LOG` wins; otherwise `fallback` (usually the config's
/// `log_filter`) is used, and `liars_odds=info` if that doesn't parse.
/// Only the first call has any effect.
pub fn init_tracing(fallback: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(ENV_LOG)
            .or_else(|_| EnvFilter::try_new(fallback))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
