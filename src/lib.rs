//! # Vouch
//!
//! Vouch is a small HTTP service that validates user/business profile
//! payloads against a fixed, ordered set of field rules and answers with
//! either a success acknowledgment or a list of human-readable error
//! messages.
//!
//! ## Architecture
//!
//! ```text
//! REST API Layer (axum) → Rule Evaluation → Field Lookup
//!        ↓                       ↓
//! Request Tracing        Declared-constant rule tables
//! ```
//!
//! ## Core Components
//!
//! - **REST API**: two axum routers sharing one validation core. The
//!   business API reads nested `businessProfile.*` fields; the product API
//!   reads flat top-level fields and additionally requires a `productId`
//!   request header.
//! - **Validation Core**: dotted-path lookup over an arbitrary JSON payload
//!   plus an ordered rule table of (path, check, message) entries.
//! - **Observability**: structured logging via the tracing ecosystem with a
//!   per-request span middleware.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vouch::{api, Config, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::from_env()?;
//!     let router = api::business_router(&config.server);
//!     api::start_api_server(config.server, router).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod observability;
pub mod validation;

// Re-export commonly used types and traits
pub use config::Config;
pub use errors::{Error, Result};
pub use observability::init_observability;

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
