//! Domain primitives, services, and ports.
//!
//! Purpose: define the laborer credential model and the use-cases over it
//! independently of HTTP and Postgres. Adapters live under `inbound` and
//! `outbound` and only meet the domain through [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Laborer, LaborerId, Email, PasswordHash: the stored record and its
//!   value types.
//! - LaborerFilter: single-field lookup filter.
//! - LoginCredentials, RegistrationDetails: validated request input.
//! - SessionToken, SessionClaims: stateless session tokens.
//! - CredentialService: implementation of the driving ports.

pub mod auth;
pub mod credential_service;
pub mod error;
pub mod filter;
pub mod laborer;
pub mod ports;
pub mod session;
pub mod trace_id;

pub use self::auth::{CredentialValidationError, LoginCredentials, RegistrationDetails};
pub use self::credential_service::CredentialService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::filter::{LaborerFilter, LaborerFilterError};
pub use self::laborer::{
    Email, Laborer, LaborerCredential, LaborerId, LaborerValidationError, NewLaborer, PasswordHash,
};
pub use self::session::{SESSION_TTL_SECS, SessionClaims, SessionToken, session_ttl};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
