//! # Observability Infrastructure
//!
//! This module provides observability for the Vouch service: structured
//! logging through the tracing ecosystem and a per-request tracing
//! middleware for the HTTP layer.

pub mod http_tracing;
pub mod logging;

pub use http_tracing::trace_http_requests;
pub use logging::{init_tracing, log_config_info};

use crate::config::ObservabilityConfig;
use crate::errors::Result;
use tracing::info;

/// Initialize all observability components
pub fn init_observability(config: &ObservabilityConfig) -> Result<()> {
    init_tracing(config)?;

    info!(
        service_name = %config.service_name,
        log_level = %config.log_level,
        json_logs = %config.json_logs,
        "Observability initialized successfully"
    );

    Ok(())
}
