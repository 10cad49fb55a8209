use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use crate::support::{business_app, read_json, send_request};

#[tokio::test]
async fn contract_empty_body_reports_missing_user_id() {
    let response =
        send_request(business_app(), Method::POST, "/user/validate", None, Some(json!({}))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_json(response).await;
    assert_eq!(body, json!({"error": "User ID is missing in the request."}));
}

#[tokio::test]
async fn contract_missing_id_short_circuits_field_rules() {
    // Invalid fields must not surface when the identifier is absent
    let payload = json!({
        "businessProfile": {
            "companyName": "",
            "email": "not-an-email"
        }
    });

    let response =
        send_request(business_app(), Method::POST, "/user/validate", None, Some(payload)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_json(response).await;
    assert_eq!(body, json!({"error": "User ID is missing in the request."}));
}

#[tokio::test]
async fn contract_empty_string_id_counts_as_missing() {
    let response = send_request(
        business_app(),
        Method::POST,
        "/user/validate",
        None,
        Some(json!({"id": ""})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_json(response).await;
    assert_eq!(body, json!({"error": "User ID is missing in the request."}));
}

#[tokio::test]
async fn contract_non_string_id_counts_as_missing() {
    let response = send_request(
        business_app(),
        Method::POST,
        "/user/validate",
        None,
        Some(json!({"id": 42})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_json(response).await;
    assert_eq!(body, json!({"error": "User ID is missing in the request."}));
}

#[tokio::test]
async fn contract_valid_payload_returns_acknowledgment() {
    let payload = json!({
        "id": "u1",
        "businessProfile": {
            "companyName": "Acme",
            "legalName": "Acme Inc",
            "taxIdentifiers": { "pan": "AB12345678", "ein": "12345678" },
            "email": "ops@acme.com"
        }
    });

    let response =
        send_request(business_app(), Method::POST, "/user/validate", None, Some(payload)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = read_json(response).await;
    assert_eq!(body, json!({"message": "User data is valid.", "userId": "u1"}));
}

#[tokio::test]
async fn contract_absent_profile_fields_silently_pass() {
    // "Validate only if present": nothing besides the identifier is mandatory
    let response = send_request(
        business_app(),
        Method::POST,
        "/user/validate",
        None,
        Some(json!({"id": "u1"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = read_json(response).await;
    assert_eq!(body, json!({"message": "User data is valid.", "userId": "u1"}));
}

#[tokio::test]
async fn contract_rule_failures_follow_declared_order() {
    // Worked example from the service contract
    let payload = json!({
        "id": "u1",
        "businessProfile": {
            "companyName": "Acme",
            "legalName": "",
            "taxIdentifiers": { "pan": "AB12345678", "ein": "1234567" },
            "email": "bad"
        }
    });

    let response =
        send_request(business_app(), Method::POST, "/user/validate", None, Some(payload)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_json(response).await;
    assert_eq!(
        body,
        json!({
            "errors": [
                "Legal name should not be empty.",
                "EIN should be 8 digits.",
                "Email is invalid."
            ],
            "userId": "u1"
        })
    );
}

#[tokio::test]
async fn contract_invalid_pan_reports_only_pan() {
    let payload = json!({
        "id": "u1",
        "businessProfile": {
            "companyName": "Acme",
            "taxIdentifiers": { "pan": "TOO-SHORT" }
        }
    });

    let response =
        send_request(business_app(), Method::POST, "/user/validate", None, Some(payload)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_json(response).await;
    assert_eq!(body, json!({"errors": ["PAN numnber not valid."], "userId": "u1"}));
}

#[tokio::test]
async fn contract_health_endpoint() {
    let response = send_request(business_app(), Method::GET, "/health", None, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = read_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "vouch");
}
