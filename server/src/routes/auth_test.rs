use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, header};
use tower::util::ServiceExt; // for `oneshot`

use super::*;
use crate::services::session::TokenSigner;
use crate::store::{MemStore, StoreError};

fn test_app() -> axum::Router {
    let state = AppState::new(Arc::new(MemStore::default()), TokenSigner::new("test-secret"), 4);
    crate::routes::app(state, "http://localhost:3000")
}

fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn body_message(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: MessageResponse = serde_json::from_slice(&bytes).unwrap();
    body.message
}

#[test]
fn status_maps_validation_to_400() {
    assert_eq!(auth_error_to_status(&AuthError::Validation), StatusCode::BAD_REQUEST);
}

#[test]
fn status_maps_conflict_to_409() {
    assert_eq!(auth_error_to_status(&AuthError::Conflict), StatusCode::CONFLICT);
}

#[test]
fn status_maps_not_found_to_404() {
    assert_eq!(auth_error_to_status(&AuthError::NotFound), StatusCode::NOT_FOUND);
}

#[test]
fn status_maps_unauthorized_to_401() {
    assert_eq!(auth_error_to_status(&AuthError::Unauthorized), StatusCode::UNAUTHORIZED);
}

#[test]
fn status_maps_store_failure_to_500() {
    let err = AuthError::Store(StoreError::Read(std::io::Error::other("disk on fire")));
    assert_eq!(auth_error_to_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn client_errors_carry_their_display_message() {
    assert_eq!(auth_error_body(&AuthError::Conflict).message, "User with this email already exists.");
    assert_eq!(auth_error_body(&AuthError::Unauthorized).message, "Invalid credentials.");
    assert_eq!(auth_error_body(&AuthError::NotFound).message, "User not found.");
    assert_eq!(auth_error_body(&AuthError::Validation).message, "All fields are required.");
}

#[test]
fn store_failure_collapses_to_generic_message() {
    let err = AuthError::Store(StoreError::Read(std::io::Error::other("disk on fire")));
    let body = auth_error_body(&err);
    assert_eq!(body.message, GENERIC_FAILURE);
    assert!(!body.message.contains("disk"));
}

// =============================================================================
// Full-router checks — a body with an absent field must come back as a 400
// with a `{message}` JSON body, never as a deserialization rejection.
// =============================================================================

#[tokio::test]
async fn signup_with_absent_field_is_bad_request_with_message() {
    let response = test_app()
        .oneshot(json_post("/signup", r#"{"name":"Ana","email":"ana@x.com"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_message(response).await, "All fields are required.");
}

#[tokio::test]
async fn login_with_absent_field_is_bad_request_with_message() {
    let response = test_app()
        .oneshot(json_post("/login", r#"{"email":"ana@x.com"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_message(response).await, "All fields are required.");
}

#[tokio::test]
async fn signup_with_all_fields_is_created() {
    let response = test_app()
        .oneshot(json_post("/signup", r#"{"name":"Ana","email":"ana@x.com","password":"Secret123"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_message(response).await, "User registered successfully. You can now log in.");
}
