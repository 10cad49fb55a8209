//! # Structured Logging
//!
//! Subscriber setup for the tracing ecosystem. The base log level comes
//! from configuration and can be overridden per-module with `RUST_LOG`.
//! JSON output is available for log aggregation pipelines.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, ObservabilityConfig};
use crate::errors::{Error, Result};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level so individual
/// modules can be turned up without touching service configuration.
pub fn init_tracing(config: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| {
            Error::config(format!("Invalid log level '{}': {}", config.log_level, e))
        })?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json_logs {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };

    result.map_err(|e| Error::internal(format!("Failed to set tracing subscriber: {}", e)))
}

/// Log configuration at startup
pub fn log_config_info(config: &Config) {
    tracing::info!(
        business_api_address = %config.server.socket_address(),
        product_api_address = %config.product_server.socket_address(),
        cors_enabled = %config.server.enable_cors,
        log_level = %config.observability.log_level,
        json_logs = %config.observability.json_logs,
        "Vouch service configuration"
    );
}
