//! Laborer records and their value types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors raised by the laborer value constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LaborerValidationError {
    /// Email was missing or blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Identifier was not a base-10 integer.
    #[error("id must be an integer, got '{value}'")]
    InvalidId { value: String },
    /// Stored password hash was blank.
    #[error("password hash must not be empty")]
    EmptyPasswordHash,
}

/// Store-assigned laborer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaborerId(i64);

impl LaborerId {
    /// Wrap a raw identifier produced by the store.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for LaborerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LaborerId {
    type Err = LaborerValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| LaborerValidationError::InvalidId {
                value: s.to_owned(),
            })
    }
}

/// Email address used as the login handle.
///
/// ## Invariants
/// - Surrounding whitespace is trimmed and the result is non-empty.
///
/// # Examples
/// ```
/// use laborer_service::domain::Email;
///
/// let email = Email::new("  a@x.com ").unwrap();
/// assert_eq!(email.as_ref(), "a@x.com");
/// assert!(Email::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    pub fn new(raw: impl AsRef<str>) -> Result<Self, LaborerValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(LaborerValidationError::EmptyEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = LaborerValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

/// Salted one-way hash of a laborer's password, in PHC string format.
///
/// The hash is never serialised; `Debug` redacts it.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash read from the store or produced by a hasher.
    pub fn new(encoded: impl Into<String>) -> Result<Self, LaborerValidationError> {
        let encoded = encoded.into();
        if encoded.trim().is_empty() {
            return Err(LaborerValidationError::EmptyPasswordHash);
        }
        Ok(Self(encoded))
    }

    /// Stand-in hash verified when no laborer holds the supplied email.
    ///
    /// Encodes the default Argon2id cost, so a miss costs the same as a
    /// wrong password. No password hashes to its all-zero output.
    pub fn decoy() -> Self {
        Self(DECOY_PASSWORD_HASH.to_owned())
    }
}

/// PHC string behind [`PasswordHash::decoy`].
pub const DECOY_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$\
AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// A laborer as exposed to lookup callers.
///
/// Holds no credential; lookups never return password material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Laborer {
    id: LaborerId,
    email: Email,
    name: Option<String>,
    mobile: Option<String>,
}

impl Laborer {
    /// Assemble a laborer from validated parts.
    pub fn new(id: LaborerId, email: Email, name: Option<String>, mobile: Option<String>) -> Self {
        Self {
            id,
            email,
            name,
            mobile,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> LaborerId {
        self.id
    }

    /// Login email.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Optional display name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Optional contact number.
    pub fn mobile(&self) -> Option<&str> {
        self.mobile.as_deref()
    }
}

/// Values persisted by a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLaborer {
    /// Login email; unique within the store.
    pub email: Email,
    /// Hashed credential.
    pub password_hash: PasswordHash,
    /// Optional contact number.
    pub mobile: Option<String>,
}

/// The stored credential for one laborer, read during authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaborerCredential {
    /// Identifier embedded in issued session tokens.
    pub id: LaborerId,
    /// Hash to verify the supplied password against.
    pub password_hash: PasswordHash,
}
