//! Logging setup

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Build the filter: `RUST_LOG` when set, otherwise the configured level
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global tracing subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = build_filter(config);
    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        registry
            .with(fmt::layer().json().with_current_span(true).with_target(true))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_thread_ids(false))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
