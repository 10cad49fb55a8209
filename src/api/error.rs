use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Error message for a missing body identifier
pub const USER_ID_MISSING: &str = "User ID is missing in the request.";

/// Error message for a missing `productId` header
pub const PRODUCT_ID_MISSING: &str = "Product ID is missing in the request.";

/// Request-level errors with the exact wire envelopes callers depend on.
///
/// Missing identifiers short-circuit before any field rule runs and come
/// back as a single `error` string. Field-rule failures are accumulated
/// into an `errors` list with the identifiers echoed alongside.
#[derive(Debug)]
pub enum ApiError {
    MissingIdentifier(&'static str),
    ValidationFailed { errors: Vec<String>, user_id: String, product_id: Option<String> },
}

impl ApiError {
    pub fn missing_user_id() -> Self {
        ApiError::MissingIdentifier(USER_ID_MISSING)
    }

    pub fn missing_product_id() -> Self {
        ApiError::MissingIdentifier(PRODUCT_ID_MISSING)
    }
}

#[derive(Serialize)]
struct IdentifierErrorBody {
    error: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RuleErrorBody {
    errors: Vec<String>,
    user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_id: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::MissingIdentifier(message) => {
                (StatusCode::BAD_REQUEST, Json(IdentifierErrorBody { error: message }))
                    .into_response()
            }
            ApiError::ValidationFailed { errors, user_id, product_id } => (
                StatusCode::BAD_REQUEST,
                Json(RuleErrorBody { errors, user_id, product_id }),
            )
                .into_response(),
        }
    }
}
