//! Diagnostic logging setup.
//!
//! Logs go to stderr without ANSI colours; stdout carries only the table
//! and the result line. `RUST_LOG` overrides the default `warn` filter.

use std::io;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global stderr subscriber.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(false)
            .with_target(false),
    );

    if subscriber.try_init().is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
