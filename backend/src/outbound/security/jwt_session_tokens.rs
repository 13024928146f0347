//! HS256 JWT implementation of the `SessionTokenIssuer` port.
//!
//! Tokens carry `userId`, `iat`, and `exp` (seconds since the epoch). Expiry
//! is checked against the injected clock, not the system time.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::domain::ports::{SessionTokenError, SessionTokenIssuer};
use crate::domain::{LaborerId, SessionClaims, SessionToken};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenClaims {
    user_id: i64,
    iat: i64,
    exp: i64,
}

/// Signs and verifies session tokens with a shared secret.
pub struct JwtSessionTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl JwtSessionTokens {
    /// Build an issuer from the signing secret and a clock.
    pub fn new(secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            clock,
        }
    }
}

fn timestamp(seconds: i64) -> Result<DateTime<Utc>, SessionTokenError> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| SessionTokenError::invalid(format!("timestamp {seconds} out of range")))
}

impl SessionTokenIssuer for JwtSessionTokens {
    fn issue(&self, laborer_id: LaborerId) -> Result<SessionToken, SessionTokenError> {
        let claims = SessionClaims::issue(laborer_id, self.clock.utc());
        let payload = TokenClaims {
            user_id: claims.laborer_id.get(),
            iat: claims.issued_at.timestamp(),
            exp: claims.expires_at.timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &payload, &self.encoding)
            .map(SessionToken::new)
            .map_err(|err| SessionTokenError::signing(err.to_string()))
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, SessionTokenError> {
        let data = decode::<TokenClaims>(token, &self.decoding, &self.validation)
            .map_err(|err| SessionTokenError::invalid(err.to_string()))?;
        let claims = SessionClaims {
            laborer_id: LaborerId::new(data.claims.user_id),
            issued_at: timestamp(data.claims.iat)?,
            expires_at: timestamp(data.claims.exp)?,
        };
        if claims.is_expired_at(self.clock.utc()) {
            return Err(SessionTokenError::Expired);
        }
        Ok(claims)
    }
}
