//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod credential_hasher;
mod laborer_repository;
mod laborers_query;
mod login_service;
mod registration_service;
mod session_tokens;

#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHasher, PasswordHashError};
#[cfg(test)]
pub use laborer_repository::MockLaborerRepository;
pub use laborer_repository::{LaborerPersistenceError, LaborerRepository};
#[cfg(test)]
pub use laborers_query::MockLaborersQuery;
pub use laborers_query::LaborersQuery;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use registration_service::MockRegistrationService;
pub use registration_service::RegistrationService;
#[cfg(test)]
pub use session_tokens::MockSessionTokenIssuer;
pub use session_tokens::{SessionTokenError, SessionTokenIssuer};
