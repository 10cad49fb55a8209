//! # HTTP Request Tracing Middleware
//!
//! Axum middleware that wraps every request in an `http_request` span and
//! logs method, path, status, and latency on completion.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info_span, Instrument};

/// Axum middleware that traces each HTTP request
pub async fn trace_http_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let span = info_span!("http_request", method = %method, path = %path);
    let response = async move { next.run(request).await }.instrument(span).await;

    let status_code = response.status().as_u16();
    let elapsed = start.elapsed();

    if status_code >= 500 {
        tracing::error!(
            method = %method,
            path = %path,
            status = status_code,
            elapsed_ms = elapsed.as_millis() as u64,
            "HTTP request failed"
        );
    } else {
        tracing::info!(
            method = %method,
            path = %path,
            status = status_code,
            elapsed_ms = elapsed.as_millis() as u64,
            "HTTP request completed"
        );
    }

    response
}
