//! Diagnostics go to stderr; stdout carries nothing but typed text.

use std::env;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter, e.g. `TYPIST_LOG=debug`.
pub const LOG_ENV: &str = "TYPIST_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Filter from `directives`, falling back to warnings only when they are
/// missing or don't parse.
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber, filtered by [`LOG_ENV`].
pub fn init_tracing() {
    let directives = env::var(LOG_ENV).ok();
    tracing_subscriber::registry()
        .with(filter_from(directives.as_deref()))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
