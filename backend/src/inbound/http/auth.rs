//! Credential endpoints: registration, login, and logout.
//!
//! ```text
//! POST /register {"email":"a@x.com","password":"p1","mobile":"555"}
//! POST /login {"email":"a@x.com","password":"p1"}
//! POST /logout
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, LoginCredentials, RegistrationDetails};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::credential_error;

/// Login request body for `POST /login`.
///
/// Fields are optional on the wire; absence is reported by credential
/// validation.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(example = "a@x.com")]
    pub email: Option<String>,
    #[serde(default)]
    #[schema(example = "p1")]
    pub password: Option<String>,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = Error;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.email.as_deref().unwrap_or_default(),
            value.password.as_deref().unwrap_or_default(),
        )
        .map_err(credential_error)
    }
}

/// Registration request body for `POST /register`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    #[schema(example = "a@x.com")]
    pub email: Option<String>,
    #[serde(default)]
    #[schema(example = "p1")]
    pub password: Option<String>,
    #[serde(default)]
    #[schema(example = "555")]
    pub mobile: Option<String>,
}

impl TryFrom<RegisterRequest> for RegistrationDetails {
    type Error = Error;

    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.email.as_deref().unwrap_or_default(),
            value.password.as_deref().unwrap_or_default(),
            value.mobile.as_deref(),
        )
        .map_err(credential_error)
    }
}

/// Successful login payload.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    /// HS256 JWT carrying `userId`, valid for one hour.
    pub token: String,
}

/// Successful registration payload.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[schema(example = "User registered successfully")]
    pub message: String,
    #[schema(example = 1)]
    pub user_id: i64,
}

/// Plain acknowledgement payload.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Logged out successfully")]
    pub message: String,
}

/// Authenticate a laborer and issue a session token.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Missing email or password", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let credentials = LoginCredentials::try_from(payload.into_inner())?;
    let token = state.login.authenticate(&credentials).await?;
    Ok(web::Json(LoginResponse {
        message: "Login successful".to_owned(),
        token: token.into_inner(),
    }))
}

/// Register a new laborer.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Laborer created", body = RegisterResponse),
        (
            status = 400,
            description = "Missing or overlong fields, or duplicate email",
            body = ErrorSchema
        ),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "register"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let details = RegistrationDetails::try_from(payload.into_inner())?;
    let id = state.registration.register(&details).await?;
    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "User registered successfully".to_owned(),
        user_id: id.get(),
    }))
}

/// Acknowledge a logout. Sessions are stateless tokens, so nothing is
/// revoked.
#[utoipa::path(
    post,
    path = "/logout",
    responses((status = 200, description = "Logged out", body = MessageResponse)),
    tags = ["auth"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout() -> web::Json<MessageResponse> {
    web::Json(MessageResponse {
        message: "Logged out successfully".to_owned(),
    })
}
