// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! Silent unless `REVIEWCAT_LOG` holds a valid filter, e.g.
//! `REVIEWCAT_LOG=debug reviewcat --help`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "REVIEWCAT_LOG";

const DEFAULT_FILTER: &str = "off";

/// Build a filter from raw directives, falling back to `off`.
pub fn parse_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let directives = std::env::var(LOG_ENV).ok();
    let filter = parse_filter(directives.as_deref());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
