//! # REST API Components
//!
//! This module provides the REST API implementation for the Vouch service:
//! HTTP routing, the validation handlers for both API variants, response
//! envelopes, and the server loop.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use routes::{business_router, product_router};
pub use server::start_api_server;
