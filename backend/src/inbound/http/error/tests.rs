//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

async fn body_of(error: &Error) -> (StatusCode, Option<String>, Value) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("trace header is ASCII").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error body is JSON");
    (status, header, body)
}

#[rstest]
#[case(Error::invalid_request("Email already exists"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("Invalid credentials."), StatusCode::UNAUTHORIZED)]
#[case(Error::not_found("User not found"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("laborer store unavailable: connection refused")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "email": "a@x.com" }));

    let (status, header, body) = body_of(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(expected_trace_id.as_str()));
    assert_eq!(
        body,
        json!({ "message": INTERNAL_ERROR_MESSAGE, "traceId": expected_trace_id })
    );
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details(expected_trace_id: String) {
    let error = Error::invalid_request("Email and password are required.")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "field": "password" }));

    let (status, header, body) = body_of(&error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(header.as_deref(), Some(expected_trace_id.as_str()));
    assert_eq!(body["message"], "Email and password are required.");
    assert_eq!(body["details"]["field"], "password");
    assert!(body.get("code").is_none());
}

#[rstest]
#[actix_web::test]
async fn missing_trace_id_omits_header() {
    let (_, header, body) = body_of(&Error::not_found("User not found")).await;

    assert!(header.is_none());
    assert_eq!(body, json!({ "message": "User not found" }));
}

#[rstest]
fn actix_errors_become_internal() {
    let actix_error = actix_web::error::ErrorBadGateway("upstream detail");
    let error = Error::from(actix_error);

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), INTERNAL_ERROR_MESSAGE);
}

#[rstest]
#[case(Error::unauthorized("Invalid credentials."), Some(BEARER_CHALLENGE))]
#[case(Error::invalid_request("Email already exists"), None)]
#[case(Error::not_found("User not found"), None)]
#[case(Error::internal("boom"), None)]
fn only_unauthorised_responses_carry_a_bearer_challenge(
    #[case] error: Error,
    #[case] challenge: Option<&str>,
) {
    let response = ResponseError::error_response(&error);
    let headers = response.headers();

    assert_eq!(
        headers
            .get(header::WWW_AUTHENTICATE)
            .and_then(|value| value.to_str().ok()),
        challenge
    );
    assert_eq!(
        headers
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok()),
        Some("no-store")
    );
}

#[rstest]
#[actix_web::test]
async fn duplicate_email_keeps_its_field_details() {
    let error = Error::invalid_request("Email already exists")
        .with_details(json!({ "field": "email", "code": "duplicate_email" }));

    let (status, header, body) = body_of(&error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(header.is_none());
    assert_eq!(
        body,
        json!({
            "message": "Email already exists",
            "details": { "field": "email", "code": "duplicate_email" },
        })
    );
}
