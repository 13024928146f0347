//! Port for issuing and verifying signed session tokens.

use crate::domain::{LaborerId, SessionClaims, SessionToken};

use super::define_port_error;

define_port_error! {
    /// Errors raised while issuing or verifying session tokens.
    pub enum SessionTokenError {
        /// The token could not be signed.
        Signing { message: String } => "session token signing failed: {message}",
        /// The token was well formed but its validity window has elapsed.
        Expired => "session token has expired",
        /// The token failed decoding or signature verification.
        Invalid { message: String } => "session token is invalid: {message}",
    }
}

/// Issues stateless session tokens and verifies them against the same secret.
#[cfg_attr(test, mockall::automock)]
pub trait SessionTokenIssuer: Send + Sync {
    /// Sign a token for `laborer_id`, valid for the standard window.
    fn issue(&self, laborer_id: LaborerId) -> Result<SessionToken, SessionTokenError>;

    /// Decode `token`, checking signature and expiry.
    fn verify(&self, token: &str) -> Result<SessionClaims, SessionTokenError>;
}
