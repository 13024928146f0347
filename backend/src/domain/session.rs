//! Session tokens issued on successful login.
//!
//! Tokens are stateless: anyone holding the signing secret can verify them
//! until `expires_at`. Nothing is recorded server-side, so logout has nothing
//! to revoke.

use std::fmt;

use chrono::{DateTime, Duration, Utc};

use super::LaborerId;

/// Validity window of an issued token, in seconds.
pub const SESSION_TTL_SECS: i64 = 3600;

/// Validity window of an issued token.
pub fn session_ttl() -> Duration {
    Duration::seconds(SESSION_TTL_SECS)
}

/// Opaque signed session token handed to the client.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Claims carried by a session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClaims {
    pub laborer_id: LaborerId,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
    /// Claims for a token issued at `now` with the standard validity window.
    ///
    /// Timestamps are truncated to whole seconds, matching their encoded
    /// form.
    pub fn issue(laborer_id: LaborerId, now: DateTime<Utc>) -> Self {
        let issued_at = DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now);
        Self {
            laborer_id,
            issued_at,
            expires_at: issued_at + session_ttl(),
        }
    }

    /// Whether the token has lapsed at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
