//! Port abstraction for laborer persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Email, Laborer, LaborerCredential, LaborerFilter, LaborerId, NewLaborer};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by laborer repository adapters.
    pub enum LaborerPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "laborer repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "laborer repository query failed: {message}",
        /// The store's uniqueness constraint rejected the email.
        DuplicateEmail => "a laborer with this email already exists",
    }
}

/// Driven port over the relational store of laborer records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LaborerRepository: Send + Sync {
    /// Insert a laborer and return the store-assigned identifier.
    ///
    /// Fails with [`LaborerPersistenceError::DuplicateEmail`] when the email
    /// is already registered.
    async fn insert(&self, laborer: &NewLaborer) -> Result<LaborerId, LaborerPersistenceError>;

    /// Fetch the stored credential for `email`, if any.
    async fn find_credential(
        &self,
        email: &Email,
    ) -> Result<Option<LaborerCredential>, LaborerPersistenceError>;

    /// Return every laborer matching `filter`, ordered by identifier.
    async fn find_matching(
        &self,
        filter: &LaborerFilter,
    ) -> Result<Vec<Laborer>, LaborerPersistenceError>;
}
