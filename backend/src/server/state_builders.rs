//! Builders wiring outbound adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use laborer_service::domain::CredentialService;
use laborer_service::inbound::http::state::HttpState;
use laborer_service::outbound::persistence::DieselLaborerRepository;
use laborer_service::outbound::security::{Argon2CredentialHasher, JwtSessionTokens};

use super::ServerConfig;

/// Build the HTTP state backed by Postgres, Argon2, and signed tokens.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let service = CredentialService::new(
        Arc::new(DieselLaborerRepository::new(config.db_pool.clone())),
        Arc::new(Argon2CredentialHasher::new()),
        Arc::new(JwtSessionTokens::new(
            config.jwt_secret.as_slice(),
            Arc::new(DefaultClock),
        )),
    );
    web::Data::new(HttpState::from_service(Arc::new(service)))
}
