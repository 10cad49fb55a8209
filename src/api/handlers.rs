use axum::{http::HeaderMap, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::validation::{evaluate_rules, BUSINESS_PROFILE_RULES, FLAT_PROFILE_RULES};

use super::error::ApiError;

/// Success acknowledgment text, part of the wire contract
pub const USER_DATA_VALID: &str = "User data is valid.";

/// Success acknowledgment echoed back with the caller's identifiers
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSuccess {
    pub message: &'static str,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
}

/// Health probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// An identifier counts as supplied only when it is a non-empty JSON string
fn required_string(payload: &Value, key: &str) -> Option<String> {
    payload.get(key).and_then(Value::as_str).filter(|s| !s.is_empty()).map(str::to_owned)
}

/// `POST /user/validate` on the business API.
///
/// Requires a body-level `id`; validates the nested `businessProfile.*`
/// fields that are present.
pub async fn validate_business_profile_handler(
    Json(payload): Json<Value>,
) -> Result<Json<ValidationSuccess>, ApiError> {
    let user_id = required_string(&payload, "id").ok_or_else(ApiError::missing_user_id)?;

    let errors = evaluate_rules(&payload, BUSINESS_PROFILE_RULES);
    if !errors.is_empty() {
        info!(
            user_id = %user_id,
            error_count = errors.len(),
            "Business profile validation failed"
        );
        return Err(ApiError::ValidationFailed { errors, user_id, product_id: None });
    }

    info!(user_id = %user_id, "Business profile validated");
    Ok(Json(ValidationSuccess { message: USER_DATA_VALID, user_id, product_id: None }))
}

/// `POST /user/validate` on the product API.
///
/// Requires a body-level `userId` and a `productId` header, checked in
/// that order; validates the flat top-level fields that are present.
pub async fn validate_product_profile_handler(
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Result<Json<ValidationSuccess>, ApiError> {
    let user_id = required_string(&payload, "userId").ok_or_else(ApiError::missing_user_id)?;

    let product_id = headers
        .get("productId")
        .and_then(|value| value.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .ok_or_else(ApiError::missing_product_id)?;

    let errors = evaluate_rules(&payload, FLAT_PROFILE_RULES);
    if !errors.is_empty() {
        info!(
            user_id = %user_id,
            product_id = %product_id,
            error_count = errors.len(),
            "Product profile validation failed"
        );
        return Err(ApiError::ValidationFailed {
            errors,
            user_id,
            product_id: Some(product_id),
        });
    }

    info!(user_id = %user_id, product_id = %product_id, "Product profile validated");
    Ok(Json(ValidationSuccess {
        message: USER_DATA_VALID,
        user_id,
        product_id: Some(product_id),
    }))
}

/// `GET /health` on both listeners
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok", service: crate::APP_NAME, version: crate::VERSION })
}
