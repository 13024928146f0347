//! Driving port for laborer registration.

use async_trait::async_trait;

use crate::domain::{Error, LaborerId, RegistrationDetails};

/// Domain use-case port for creating laborer accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Persist a new laborer and return its identifier.
    async fn register(&self, details: &RegistrationDetails) -> Result<LaborerId, Error>;
}
