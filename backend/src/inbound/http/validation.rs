//! Shared validation helpers for inbound HTTP adapters.
//!
//! Converts domain validation failures and extractor rejections into
//! `400 Bad Request` errors with a `{field, code}` detail object.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde_json::json;
use tracing::debug;

use crate::domain::{CredentialValidationError, Error, LaborerFilterError};

pub const CREDENTIALS_REQUIRED_MESSAGE: &str = "Email and password are required.";
pub const MISSING_FILTER_MESSAGE: &str =
    "No valid query parameter provided (id, name, or email required)";

/// Validation error codes carried in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    TooLong,
    InvalidInteger,
    MissingFilter,
    MalformedPayload,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::TooLong => "too_long",
            Self::InvalidInteger => "invalid_integer",
            Self::MissingFilter => "missing_filter",
            Self::MalformedPayload => "malformed_payload",
        }
    }
}

pub(crate) fn credential_error(err: CredentialValidationError) -> Error {
    match err {
        CredentialValidationError::TooLong { field, max } => {
            Error::invalid_request(format!("{field} must be at most {max} characters."))
                .with_details(json!({
                    "field": field,
                    "max": max,
                    "code": ValidationCode::TooLong.as_str(),
                }))
        }
        CredentialValidationError::EmptyEmail | CredentialValidationError::EmptyPassword => {
            Error::invalid_request(CREDENTIALS_REQUIRED_MESSAGE).with_details(json!({
                "field": err.field(),
                "code": ValidationCode::MissingField.as_str(),
            }))
        }
    }
}

pub(crate) fn filter_error(err: LaborerFilterError) -> Error {
    match err {
        LaborerFilterError::Missing => Error::invalid_request(MISSING_FILTER_MESSAGE)
            .with_details(json!({ "code": ValidationCode::MissingFilter.as_str() })),
        LaborerFilterError::InvalidId { value } => {
            Error::invalid_request("id must be an integer").with_details(json!({
                "field": "id",
                "value": value,
                "code": ValidationCode::InvalidInteger.as_str(),
            }))
        }
    }
}

fn malformed(kind: &str, detail: String) -> Error {
    debug!(kind, detail = %detail, "request payload rejected");
    Error::invalid_request(format!("Malformed {kind}."))
        .with_details(json!({ "code": ValidationCode::MalformedPayload.as_str() }))
}

/// JSON extractor configuration reporting rejections as domain errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            malformed("JSON body", err.to_string()).into()
        })
}

/// Query extractor configuration reporting rejections as domain errors.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
            malformed("query string", err.to_string()).into()
        })
}
