//! Tracing subscriber configuration for the driver.
//!
//! Log levels follow these conventions:
//! - INFO: run lifecycle (parameters at start, summary at completion)
//! - DEBUG: per-arrival classification, restarts
//! - TRACE: tracker branch decisions and window movement

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with sensible defaults.
///
/// Log level can be controlled via the `RUST_LOG` environment variable.
/// Defaults to `info` if not set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Initialize the tracing subscriber with JSON output.
///
/// Activated by setting `RUST_LOG_FORMAT=json`.
pub fn init_json() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .init();
}
