//! Logging setup shared by the binaries
//!
//! Events go to stderr so stdout only carries the generator's result line.
//! The filter is read from `RUST_LOG` and falls back to [`default_log_filter`].

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub fn default_log_filter() -> &'static str {
    "warn"
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter()));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
        .context("Failed to initialise logging")
}
