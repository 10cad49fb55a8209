//! # Configuration Management
//!
//! Environment-driven configuration for the Vouch service. Settings are
//! resolved once at startup in `main` and passed down by value.

mod settings;

pub use settings::{Config, ObservabilityConfig, ServerConfig};
