//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers for domain types ([`ErrorSchema`],
//! [`LaborerSchema`]) and the request/response bodies. The document backs
//! Swagger UI in debug builds and is printed by `cargo run --bin
//! openapi-dump`.

use crate::inbound::http::auth::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, RegisterResponse,
};
use crate::inbound::http::schemas::{ErrorSchema, LaborerSchema};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Describe the bearer token returned by `POST /login`.
struct SessionTokenAddon;

impl Modify for SessionTokenAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        let mut scheme = Http::new(HttpAuthScheme::Bearer);
        scheme.bearer_format = Some("JWT".to_owned());
        scheme.description =
            Some("HS256 session token issued by POST /login, valid for one hour.".to_owned());
        components.add_security_scheme("SessionToken", SecurityScheme::Http(scheme));
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SessionTokenAddon),
    info(
        title = "Laborer credential service",
        description = "Registration, login, and lookup of laborer accounts."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::auth::register,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::laborers::lookup_laborers,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        LaborerSchema,
        LoginRequest,
        LoginResponse,
        RegisterRequest,
        RegisterResponse,
        MessageResponse
    )),
    tags(
        (name = "auth", description = "Registration and session tokens"),
        (name = "laborers", description = "Laborer lookup"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/register")]
    #[case("/login")]
    #[case("/logout")]
    #[case("/laborers")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn document_lists_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    #[case("Error")]
    #[case("Laborer")]
    #[case("LoginRequest")]
    #[case("RegisterResponse")]
    fn document_registers_schema(#[case] name: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key(name), "missing schema {name}");
    }

    #[rstest]
    fn session_token_scheme_is_bearer() {
        let doc = serde_json::to_value(ApiDoc::openapi()).expect("document serialises");
        let scheme = &doc["components"]["securitySchemes"]["SessionToken"];

        assert_eq!(scheme["scheme"], "bearer");
        assert_eq!(scheme["bearerFormat"], "JWT");
    }
}
