//! Authentication primitives: login credentials and registration details.
//!
//! Inbound adapters build these from raw request strings so the services
//! only ever see validated input.

use std::fmt;

use zeroize::Zeroizing;

use super::{Email, LaborerValidationError};

/// Domain error returned when credential payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialValidationError {
    /// Email was missing or blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
    /// A stored field exceeded its column width.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

impl CredentialValidationError {
    /// Name of the offending request field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyEmail => "email",
            Self::EmptyPassword => "password",
            Self::TooLong { field, .. } => *field,
        }
    }
}

impl From<LaborerValidationError> for CredentialValidationError {
    fn from(_: LaborerValidationError) -> Self {
        Self::EmptyEmail
    }
}

/// Widest email the laborer store accepts, in characters.
pub const MAX_EMAIL_CHARS: usize = 255;
/// Widest mobile number the laborer store accepts, in characters.
pub const MAX_MOBILE_CHARS: usize = 32;

fn check_width(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), CredentialValidationError> {
    if value.chars().count() > max {
        return Err(CredentialValidationError::TooLong { field, max });
    }
    Ok(())
}

fn validate_parts(
    email: &str,
    password: &str,
) -> Result<(Email, Zeroizing<String>), CredentialValidationError> {
    let email = Email::new(email)?;
    if password.is_empty() {
        return Err(CredentialValidationError::EmptyPassword);
    }
    Ok((email, Zeroizing::new(password.to_owned())))
}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is trimmed and non-empty.
/// - `password` is non-empty but keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use laborer_service::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" a@x.com ", "p1").unwrap();
/// assert_eq!(creds.email().as_ref(), "a@x.com");
/// assert_eq!(creds.password(), "p1");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: Email,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialValidationError> {
        let (email, password) = validate_parts(email, password)?;
        Ok(Self { email, password })
    }

    /// Email used for the credential lookup.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validated registration request.
///
/// A blank `mobile` is normalised to `None`. Email and mobile are bounded
/// by [`MAX_EMAIL_CHARS`] and [`MAX_MOBILE_CHARS`].
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationDetails {
    email: Email,
    password: Zeroizing<String>,
    mobile: Option<String>,
}

impl RegistrationDetails {
    /// Construct registration details from raw request values.
    pub fn try_from_parts(
        email: &str,
        password: &str,
        mobile: Option<&str>,
    ) -> Result<Self, CredentialValidationError> {
        let (email, password) = validate_parts(email, password)?;
        check_width("email", email.as_ref(), MAX_EMAIL_CHARS)?;
        let mobile = mobile
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned);
        if let Some(value) = mobile.as_deref() {
            check_width("mobile", value, MAX_MOBILE_CHARS)?;
        }
        Ok(Self {
            email,
            password,
            mobile,
        })
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    pub fn mobile(&self) -> Option<&str> {
        self.mobile.as_deref()
    }
}

impl fmt::Debug for RegistrationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationDetails")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("mobile", &self.mobile)
            .finish()
    }
}
