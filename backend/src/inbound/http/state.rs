//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{LaborersQuery, LoginService, RegistrationService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn RegistrationService>,
    pub laborers: Arc<dyn LaborersQuery>,
}

impl HttpState {
    /// Construct state from individual port implementations.
    pub fn new(
        login: Arc<dyn LoginService>,
        registration: Arc<dyn RegistrationService>,
        laborers: Arc<dyn LaborersQuery>,
    ) -> Self {
        Self {
            login,
            registration,
            laborers,
        }
    }

    /// Construct state from one service implementing every port.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use laborer_service::domain::CredentialService;
    /// use laborer_service::inbound::http::state::HttpState;
    /// use laborer_service::outbound::persistence::{DbPool, DieselLaborerRepository};
    /// use laborer_service::outbound::security::{Argon2CredentialHasher, JwtSessionTokens};
    /// use mockable::DefaultClock;
    ///
    /// # async fn build(pool: DbPool) {
    /// let service = CredentialService::new(
    ///     Arc::new(DieselLaborerRepository::new(pool)),
    ///     Arc::new(Argon2CredentialHasher::new()),
    ///     Arc::new(JwtSessionTokens::new(b"secret", Arc::new(DefaultClock))),
    /// );
    /// let state = HttpState::from_service(Arc::new(service));
    /// let _login = state.login.clone();
    /// # }
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: LoginService + RegistrationService + LaborersQuery + 'static,
    {
        Self {
            login: service.clone(),
            registration: service.clone(),
            laborers: service,
        }
    }
}
