//! End-to-end registration, login, and lookup over the HTTP surface.
//!
//! Uses the in-memory repository, the real Argon2 hasher, and real signed
//! tokens driven by a fixture clock.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::{DateTime, Duration};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use laborer_service::Trace;
use laborer_service::domain::ports::{SessionTokenError, SessionTokenIssuer};
use laborer_service::domain::{
    CredentialService, Email, Laborer, LaborerId, PasswordHash, TRACE_ID_HEADER,
};
use laborer_service::inbound::http::auth::{login, logout, register};
use laborer_service::inbound::http::laborers::lookup_laborers;
use laborer_service::inbound::http::state::HttpState;
use laborer_service::inbound::http::validation::{json_config, query_config};
use laborer_service::outbound::security::{Argon2CredentialHasher, JwtSessionTokens};
use laborer_service::test_support::{FixtureClock, InMemoryLaborerRepository};

const SECRET: &[u8] = b"integration-secret";

struct Harness {
    repository: Arc<InMemoryLaborerRepository>,
    tokens: Arc<JwtSessionTokens>,
    clock: Arc<FixtureClock>,
    state: HttpState,
}

#[fixture]
fn harness() -> Harness {
    let start = DateTime::from_timestamp(1_750_000_000, 0).expect("timestamp");
    let clock = Arc::new(FixtureClock::new(start));
    let repository = Arc::new(InMemoryLaborerRepository::new());
    let tokens = Arc::new(JwtSessionTokens::new(SECRET, clock.clone()));
    let service = CredentialService::new(
        repository.clone(),
        Arc::new(Argon2CredentialHasher::new()),
        tokens.clone(),
    );
    Harness {
        repository,
        tokens,
        clock,
        state: HttpState::from_service(Arc::new(service)),
    }
}

async fn app(
    state: HttpState,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(json_config())
            .app_data(query_config())
            .wrap(Trace)
            .service(register)
            .service(login)
            .service(logout)
            .service(lookup_laborers),
    )
    .await
}

async fn send<S>(app: &S, request: actix_test::TestRequest) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let response = actix_test::call_service(app, request.to_request()).await;
    assert!(response.headers().contains_key(TRACE_ID_HEADER));
    let status = response.status();
    let body = actix_test::read_body(response).await;
    (status, serde_json::from_slice(&body).expect("JSON body"))
}

fn register_request(email: &str, password: &str) -> actix_test::TestRequest {
    actix_test::TestRequest::post()
        .uri("/register")
        .set_json(json!({ "email": email, "password": password, "mobile": "555" }))
}

fn login_request(email: &str, password: &str) -> actix_test::TestRequest {
    actix_test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": email, "password": password }))
}

fn lookup_request(query: &str) -> actix_test::TestRequest {
    actix_test::TestRequest::get().uri(&format!("/laborers{query}"))
}

#[rstest]
#[actix_web::test]
async fn register_login_and_lookup(harness: Harness) {
    let app = app(harness.state.clone()).await;

    let (status, body) = send(&app, register_request("a@x.com", "p1")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User registered successfully");
    let user_id = body["userId"].as_i64().expect("userId");

    let (status, body) = send(&app, register_request("a@x.com", "other")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already exists");
    assert_eq!(harness.repository.len(), 1);

    let (status, body) = send(&app, login_request("a@x.com", "p1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    let token = body["token"].as_str().expect("token").to_owned();

    let claims = harness.tokens.verify(&token).expect("token verifies");
    assert_eq!(claims.laborer_id, LaborerId::new(user_id));

    let (status, body) = send(&app, lookup_request("?email=a@x.com")).await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().expect("array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], user_id);
    assert_eq!(records[0]["email"], "a@x.com");
    assert_eq!(records[0]["mobile"], "555");
    assert!(records[0].get("password").is_none());
    assert!(records[0].get("passwordHash").is_none());
}

#[rstest]
#[case("p1", "wrong")]
#[case("p1", "P1")]
#[actix_web::test]
async fn wrong_password_is_unauthorised(
    harness: Harness,
    #[case] registered: &str,
    #[case] attempted: &str,
) {
    let app = app(harness.state).await;
    send(&app, register_request("a@x.com", registered)).await;

    let (status, body) = send(&app, login_request("a@x.com", attempted)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials.");
}

#[rstest]
#[actix_web::test]
async fn unknown_email_is_unauthorised_with_same_message(harness: Harness) {
    let app = app(harness.state).await;

    let (status, body) = send(&app, login_request("nobody@x.com", "p1")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials.");
}

#[rstest]
#[case("?email=nobody@x.com", StatusCode::NOT_FOUND, "User not found")]
#[case(
    "",
    StatusCode::BAD_REQUEST,
    "No valid query parameter provided (id, name, or email required)"
)]
#[case("?id=abc", StatusCode::BAD_REQUEST, "id must be an integer")]
#[actix_web::test]
async fn lookup_failures(
    harness: Harness,
    #[case] query: &str,
    #[case] expected_status: StatusCode,
    #[case] message_fragment: &str,
) {
    let app = app(harness.state).await;

    let (status, body) = send(&app, lookup_request(query)).await;

    assert_eq!(status, expected_status);
    let message = body["message"].as_str().expect("message");
    assert!(
        message.contains(message_fragment),
        "unexpected message: {message}"
    );
}

#[rstest]
#[actix_web::test]
async fn name_lookup_returns_every_match_in_id_order(harness: Harness) {
    let hash = PasswordHash::new("$argon2id$unused").expect("hash");
    for (id, email, name) in [(7, "c@x.com", "Ada"), (3, "a@x.com", "Ada"), (5, "b@x.com", "Bea")] {
        harness.repository.seed(
            Laborer::new(
                LaborerId::new(id),
                Email::new(email).expect("email"),
                Some(name.to_owned()),
                None,
            ),
            hash.clone(),
        );
    }
    let app = app(harness.state).await;

    let (status, body) = send(&app, lookup_request("?name=Ada&email=b@x.com")).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|record| record["id"].as_i64().expect("id"))
        .collect();
    assert_eq!(ids, vec![3, 7]);
}

#[rstest]
#[actix_web::test]
async fn tokens_expire_after_one_hour(harness: Harness) {
    let app = app(harness.state.clone()).await;
    send(&app, register_request("a@x.com", "p1")).await;
    let (_, body) = send(&app, login_request("a@x.com", "p1")).await;
    let token = body["token"].as_str().expect("token").to_owned();

    harness.clock.advance(Duration::seconds(3599));
    assert!(harness.tokens.verify(&token).is_ok());

    harness.clock.advance(Duration::seconds(1));
    assert_eq!(
        harness.tokens.verify(&token).expect_err("expired"),
        SessionTokenError::Expired
    );
}

#[rstest]
#[actix_web::test]
async fn logout_always_succeeds(harness: Harness) {
    let app = app(harness.state).await;

    let (status, body) = send(&app, actix_test::TestRequest::post().uri("/logout")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logged out successfully");
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_rejected_with_error_body(harness: Harness) {
    let app = app(harness.state).await;
    let request = actix_test::TestRequest::post()
        .uri("/login")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json");

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
    assert!(body.get("code").is_none());
}

#[rstest]
#[actix_web::test]
async fn overlong_mobile_is_rejected_before_the_store(harness: Harness) {
    let app = app(harness.state).await;
    let request = actix_test::TestRequest::post().uri("/register").set_json(json!({
        "email": "a@x.com",
        "password": "p1",
        "mobile": "5".repeat(33),
    }));

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "mobile");
    assert_eq!(body["details"]["code"], "too_long");
    assert_eq!(harness.repository.len(), 0);
}
