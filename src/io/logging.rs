//! Structured logging setup for the command-line tool
//!
//! Events go to stderr so they never mix with generated reports. The filter
//! comes from `RUST_LOG`, falling back to warnings only.

use tracing_subscriber::{EnvFilter, fmt};

use crate::io::configuration::DEFAULT_LOG_FILTER;

/// Build the filter from `RUST_LOG` or the default level
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber
///
/// Does nothing if a subscriber is already installed.
pub fn init() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Install a verbose subscriber that writes through the test harness
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
