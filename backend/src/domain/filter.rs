//! Lookup filter for laborer queries.
//!
//! Callers may supply any combination of `id`, `name`, and `email`; exactly
//! one field is used, chosen in that priority order. Blank values count as
//! absent.

use super::{Email, LaborerId, LaborerValidationError};

/// Single-field equality filter over laborer records.
///
/// # Examples
/// ```
/// use laborer_service::domain::LaborerFilter;
///
/// let filter = LaborerFilter::from_query(None, Some("Ada"), Some("a@x.com")).unwrap();
/// assert_eq!(filter, LaborerFilter::ByName("Ada".to_owned()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaborerFilter {
    ById(LaborerId),
    ByName(String),
    ByEmail(Email),
}

/// Reasons a filter could not be built from query parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LaborerFilterError {
    /// No usable parameter was supplied.
    #[error("no lookup field supplied")]
    Missing,
    /// `id` was present but not an integer.
    #[error("id must be an integer, got '{value}'")]
    InvalidId { value: String },
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl LaborerFilter {
    /// Build a filter from optional raw query values.
    pub fn from_query(
        id: Option<&str>,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<Self, LaborerFilterError> {
        if let Some(raw) = present(id) {
            return raw
                .parse::<LaborerId>()
                .map(Self::ById)
                .map_err(|_| LaborerFilterError::InvalidId {
                    value: raw.to_owned(),
                });
        }
        if let Some(name) = present(name) {
            return Ok(Self::ByName(name.to_owned()));
        }
        if let Some(email) = present(email) {
            return Email::new(email)
                .map(Self::ByEmail)
                .map_err(|_: LaborerValidationError| LaborerFilterError::Missing);
        }
        Err(LaborerFilterError::Missing)
    }

    /// Name of the field this filter matches on.
    pub fn field(&self) -> &'static str {
        match self {
            Self::ById(_) => "id",
            Self::ByName(_) => "name",
            Self::ByEmail(_) => "email",
        }
    }
}
