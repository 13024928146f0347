//! Credential domain service.
//!
//! Implements the registration, login, and lookup driving ports over the
//! laborer repository, password hasher, and session token issuer. Store and
//! hashing faults are logged here and surface to adapters as internal errors
//! without echoing caller input.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::domain::ports::{
    CredentialHasher, LaborerPersistenceError, LaborerRepository, LaborersQuery, LoginService,
    PasswordHashError, RegistrationService, SessionTokenError, SessionTokenIssuer,
};
use crate::domain::{
    Error, Laborer, LaborerFilter, LaborerId, LoginCredentials, NewLaborer, PasswordHash,
    RegistrationDetails, SessionClaims, SessionToken,
};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials.";
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already exists";
pub const NOT_FOUND_MESSAGE: &str = "User not found";

/// Credential service implementing the laborer driving ports.
pub struct CredentialService<R, H, T> {
    repository: Arc<R>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<R, H, T> Clone for CredentialService<R, H, T> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            hasher: Arc::clone(&self.hasher),
            tokens: Arc::clone(&self.tokens),
        }
    }
}

impl<R, H, T> CredentialService<R, H, T> {
    /// Create a new service over the given adapters.
    pub fn new(repository: Arc<R>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }
}

impl<R, H, T> CredentialService<R, H, T>
where
    R: LaborerRepository,
    H: CredentialHasher,
    T: SessionTokenIssuer,
{
    fn map_persistence_error(err: LaborerPersistenceError) -> Error {
        match err {
            LaborerPersistenceError::DuplicateEmail => {
                Error::invalid_request(DUPLICATE_EMAIL_MESSAGE)
                    .with_details(json!({ "field": "email", "code": "duplicate_email" }))
            }
            LaborerPersistenceError::Connection { .. } | LaborerPersistenceError::Query { .. } => {
                error!(error = %err, "laborer store unavailable");
                Error::internal(format!("laborer store unavailable: {err}"))
            }
        }
    }

    fn map_hash_error(err: PasswordHashError) -> Error {
        error!(error = %err, "password hashing failed");
        Error::internal(format!("password hashing failed: {err}"))
    }

    fn map_token_error(err: SessionTokenError) -> Error {
        match err {
            SessionTokenError::Signing { .. } => {
                error!(error = %err, "session token signing failed");
                Error::internal(format!("session token signing failed: {err}"))
            }
            SessionTokenError::Expired => Error::unauthorized("Session expired."),
            SessionTokenError::Invalid { .. } => Error::unauthorized("Invalid session token."),
        }
    }

    /// Run the hasher against [`PasswordHash::decoy`] and discard the outcome.
    ///
    /// Unknown emails pay the same hashing cost as wrong passwords.
    async fn verify_decoy(&self, password: &str) {
        if let Err(err) = self.hasher.verify(password, &PasswordHash::decoy()).await {
            warn!(error = %err, "decoy password verification failed");
        }
    }

    /// Verify a previously issued session token and return its claims.
    ///
    /// No route consumes this; downstream services holding the same secret
    /// use it to trust the laborer id.
    pub fn verify_session(&self, token: &str) -> Result<SessionClaims, Error> {
        self.tokens.verify(token).map_err(Self::map_token_error)
    }
}

#[async_trait]
impl<R, H, T> RegistrationService for CredentialService<R, H, T>
where
    R: LaborerRepository,
    H: CredentialHasher,
    T: SessionTokenIssuer,
{
    async fn register(&self, details: &RegistrationDetails) -> Result<LaborerId, Error> {
        let password_hash = self
            .hasher
            .hash(details.password())
            .await
            .map_err(Self::map_hash_error)?;

        let laborer = NewLaborer {
            email: details.email().clone(),
            password_hash,
            mobile: details.mobile().map(str::to_owned),
        };

        let id = self
            .repository
            .insert(&laborer)
            .await
            .map_err(Self::map_persistence_error)?;
        info!(laborer_id = %id, "laborer registered");
        Ok(id)
    }
}

#[async_trait]
impl<R, H, T> LoginService for CredentialService<R, H, T>
where
    R: LaborerRepository,
    H: CredentialHasher,
    T: SessionTokenIssuer,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<SessionToken, Error> {
        let Some(stored) = self
            .repository
            .find_credential(credentials.email())
            .await
            .map_err(Self::map_persistence_error)?
        else {
            self.verify_decoy(credentials.password()).await;
            return Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        };

        let matches = self
            .hasher
            .verify(credentials.password(), &stored.password_hash)
            .await
            .map_err(Self::map_hash_error)?;
        if !matches {
            return Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        }

        let token = self
            .tokens
            .issue(stored.id)
            .map_err(Self::map_token_error)?;
        info!(laborer_id = %stored.id, "session token issued");
        Ok(token)
    }
}

#[async_trait]
impl<R, H, T> LaborersQuery for CredentialService<R, H, T>
where
    R: LaborerRepository,
    H: CredentialHasher,
    T: SessionTokenIssuer,
{
    async fn lookup(&self, filter: &LaborerFilter) -> Result<Vec<Laborer>, Error> {
        let laborers = self
            .repository
            .find_matching(filter)
            .await
            .map_err(Self::map_persistence_error)?;
        if laborers.is_empty() {
            debug!(field = filter.field(), "laborer lookup matched nothing");
            return Err(Error::not_found(NOT_FOUND_MESSAGE));
        }
        Ok(laborers)
    }
}

#[cfg(test)]
#[path = "credential_service_tests.rs"]
mod tests;
