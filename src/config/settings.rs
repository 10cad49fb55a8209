//! # Configuration Settings
//!
//! Defines the configuration structure for the Vouch service.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{Error, Result};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    /// Business API listener (nested `businessProfile.*` payloads)
    #[validate(nested)]
    pub server: ServerConfig,

    /// Product API listener (flat payloads plus `productId` header)
    #[validate(nested)]
    pub product_server: ServerConfig,

    /// Observability configuration
    #[validate(nested)]
    pub observability: ObservabilityConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            product_server: ServerConfig { port: 3003, ..ServerConfig::default() },
            observability: ObservabilityConfig::default(),
        }
    }
}

impl Config {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let config = Self {
            server: ServerConfig {
                bind_address: bind_address_from_env(),
                port: port_from_env("PORT", 3000)?,
                enable_cors: cors_from_env(),
            },
            product_server: ServerConfig {
                bind_address: bind_address_from_env(),
                port: port_from_env("PRODUCT_PORT", 3003)?,
                enable_cors: cors_from_env(),
            },
            observability: ObservabilityConfig::from_env(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        // Use validator crate for basic validation
        Validate::validate(self).map_err(Error::from)?;

        // Custom validation logic
        self.validate_custom()?;

        Ok(())
    }

    /// Custom validation logic that goes beyond what the validator crate can do
    fn validate_custom(&self) -> Result<()> {
        // Validate that the two listeners don't conflict
        if self.server.port == self.product_server.port {
            return Err(Error::validation(
                "Business and product API ports cannot be the same",
            ));
        }

        Ok(())
    }
}

/// HTTP server configuration for one listener
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Server bind address
    #[validate(length(min = 1, message = "Bind address cannot be empty"))]
    pub bind_address: String,

    /// Server port
    #[validate(range(min = 1, message = "Port must be between 1 and 65535"))]
    pub port: u16,

    /// Enable CORS
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_address: "0.0.0.0".to_string(), port: 3000, enable_cors: true }
    }
}

impl ServerConfig {
    /// Get the listener socket address
    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ObservabilityConfig {
    /// Service name reported in startup logs
    #[validate(length(min = 1, message = "Service name cannot be empty"))]
    pub service_name: String,

    /// Base log level (overridable per-module via RUST_LOG)
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub log_level: String,

    /// Emit logs as JSON instead of plain text
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: crate::APP_NAME.to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl ObservabilityConfig {
    /// Create ObservabilityConfig from environment variables
    pub fn from_env() -> Self {
        let log_level =
            std::env::var("VOUCH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let json_logs = std::env::var("VOUCH_LOG_FORMAT")
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self { service_name: crate::APP_NAME.to_string(), log_level, json_logs }
    }
}

fn bind_address_from_env() -> String {
    std::env::var("VOUCH_BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string())
}

fn cors_from_env() -> bool {
    std::env::var("VOUCH_ENABLE_CORS")
        .map(|value| !value.eq_ignore_ascii_case("false"))
        .unwrap_or(true)
}

fn port_from_env(var: &str, default: u16) -> Result<u16> {
    match std::env::var(var) {
        Ok(value) => value
            .parse()
            .map_err(|e| Error::config(format!("Invalid {} value '{}': {}", var, value, e))),
        Err(_) => Ok(default),
    }
}
