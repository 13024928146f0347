//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call this port to authenticate credentials without
//! importing the backing store or token signer, so handler tests can
//! substitute a double.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, SessionToken};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and issue a session token for the laborer.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<SessionToken, Error>;
}
