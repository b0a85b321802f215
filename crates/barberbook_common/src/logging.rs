//! Logging utilities for the BarberBook client.
//!
//! Every crate logs through `tracing`. The binary calls one of the `init`
//! functions once at startup; library code never installs a subscriber.
//! Output goes to stderr so that page output on stdout stays clean.

use std::str::FromStr;
use tracing::{error, info, warn, Level};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at WARN.
///
/// # Examples
///
/// ```
/// use barberbook_common::logging;
///
/// logging::init();
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::WARN);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` still applies; the level given here is added as a directive
/// for the `barberbook` crates on top of it.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(
        format!("barberbook={}", level)
            .parse()
            .unwrap_or_else(|_| LevelFilter::from_level(level).into()),
    );

    // try_init: a global subscriber may already be set (tests, embedding)
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Initialize from a textual level as found in configuration.
///
/// Unknown levels fall back to WARN.
pub fn init_from_str(level: &str) {
    match Level::from_str(level.trim()) {
        Ok(level) => init_with_level(level),
        Err(_) => {
            init_with_level(Level::WARN);
            warn!("Unknown log level '{}', using WARN", level);
        }
    }
}

/// Log an error with context at the ERROR level.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    error!("{}: {}", context, error);
}
