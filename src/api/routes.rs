use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::config::ServerConfig;
use crate::observability::trace_http_requests;

use super::handlers::{
    health_handler, validate_business_profile_handler, validate_product_profile_handler,
};

/// Router for the business API: nested `businessProfile.*` payloads,
/// identified by a body-level `id`
pub fn business_router(config: &ServerConfig) -> Router {
    with_common_layers(
        Router::new().route("/user/validate", post(validate_business_profile_handler)),
        config,
    )
}

/// Router for the product API: flat payloads, identified by a body-level
/// `userId` plus a `productId` header
pub fn product_router(config: &ServerConfig) -> Router {
    with_common_layers(
        Router::new().route("/user/validate", post(validate_product_profile_handler)),
        config,
    )
}

fn with_common_layers(router: Router, config: &ServerConfig) -> Router {
    let router = router
        .route("/health", get(health_handler))
        .layer(middleware::from_fn(trace_http_requests));

    if config.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
