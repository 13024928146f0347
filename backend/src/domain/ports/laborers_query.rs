//! Driving port for laborer lookups.
//!
//! An empty match set is a not-found error, never an empty list.

use async_trait::async_trait;

use crate::domain::{Error, Laborer, LaborerFilter};

/// Domain use-case port for field-based laborer lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LaborersQuery: Send + Sync {
    /// Return every laborer matching `filter`; never an empty list.
    async fn lookup(&self, filter: &LaborerFilter) -> Result<Vec<Laborer>, Error>;
}
