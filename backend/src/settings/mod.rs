//! Process configuration read once at startup.
//!
//! Values come from the environment (after `dotenvy` has loaded any `.env`
//! file). Reading goes through [`mockable::Env`] so tests can supply a
//! `MockEnv` instead of mutating the real process environment.

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use mockable::Env;
use tracing::warn;
use url::Url;
use zeroize::Zeroizing;

use crate::outbound::persistence::PoolConfig;

const DATABASE_URL_ENV: &str = "DATABASE_URL";
const DB_HOST_ENV: &str = "DB_HOST";
const DB_PORT_ENV: &str = "DB_PORT";
const DB_USER_ENV: &str = "DB_USER";
const DB_PASSWORD_ENV: &str = "DB_PASSWORD";
const DB_NAME_ENV: &str = "DB_NAME";
const DB_POOL_MAX_SIZE_ENV: &str = "DB_POOL_MAX_SIZE";
const DB_CONNECT_TIMEOUT_ENV: &str = "DB_CONNECT_TIMEOUT_SECS";
const JWT_SECRET_ENV: &str = "JWT_SECRET";
const CORS_ORIGIN_ENV: &str = "CORS_ORIGIN";
const PORT_ENV: &str = "PORT";

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_PORT: u16 = 5000;
const EPHEMERAL_SECRET_BYTES: usize = 32;

/// Build mode deciding whether missing secrets are fatal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds fall back to an ephemeral signing secret with a warning.
    Debug,
    /// Release builds require every secret explicitly.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laborer_service::settings::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// if cfg!(debug_assertions) {
    ///     assert_eq!(mode, BuildMode::Debug);
    /// } else {
    ///     assert_eq!(mode, BuildMode::Release);
    /// }
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Errors raised while reading configuration.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    /// A required environment variable is missing or blank.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Store connection settings.
#[derive(Clone)]
pub struct DatabaseSettings {
    url: Zeroizing<String>,
    pool_max_size: u32,
    connect_timeout: Duration,
}

impl DatabaseSettings {
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Pool configuration derived from these settings.
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new(self.url.as_str())
            .with_max_size(self.pool_max_size)
            .with_connection_timeout(self.connect_timeout)
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("url", &"<redacted>")
            .field("pool_max_size", &self.pool_max_size)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// Everything the service needs from its environment.
#[derive(Clone)]
pub struct ServiceSettings {
    pub database: DatabaseSettings,
    jwt_secret: Zeroizing<String>,
    pub cors_origin: String,
    pub port: u16,
}

impl fmt::Debug for ServiceSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceSettings")
            .field("database", &self.database)
            .field("jwt_secret", &"<redacted>")
            .field("cors_origin", &self.cors_origin)
            .field("port", &self.port)
            .finish()
    }
}

impl ServiceSettings {
    /// Read settings from `env`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laborer_service::settings::{BuildMode, ServiceSettings};
    /// use mockable::MockEnv;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|name| match name {
    ///     "DATABASE_URL" => Some("postgres://app:pw@db/laborers".to_owned()),
    ///     "JWT_SECRET" => Some("s3cret".to_owned()),
    ///     _ => None,
    /// });
    ///
    /// let settings = ServiceSettings::from_env(&env, BuildMode::Release).unwrap();
    /// assert_eq!(settings.port, 5000);
    /// assert_eq!(settings.jwt_secret(), b"s3cret");
    /// ```
    pub fn from_env<E: Env>(env: &E, mode: BuildMode) -> Result<Self, SettingsError> {
        Ok(Self {
            database: database_from_env(env)?,
            jwt_secret: jwt_secret_from_env(env, mode)?,
            cors_origin: cors_origin_from_env(env)?,
            port: parse_or(env, PORT_ENV, DEFAULT_PORT, "a port number (1-65535)")?,
        })
    }

    /// Token signing secret.
    pub fn jwt_secret(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Listen on all interfaces at the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn non_blank<E: Env>(env: &E, name: &str) -> Option<String> {
    env.string(name).filter(|value| !value.trim().is_empty())
}

fn required<E: Env>(env: &E, name: &'static str) -> Result<String, SettingsError> {
    non_blank(env, name).ok_or(SettingsError::MissingEnv { name })
}

fn parse_or<E, T>(
    env: &E,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, SettingsError>
where
    E: Env,
    T: std::str::FromStr,
{
    match non_blank(env, name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| SettingsError::InvalidEnv {
                name,
                value,
                expected,
            }),
    }
}

fn database_from_env<E: Env>(env: &E) -> Result<DatabaseSettings, SettingsError> {
    let url = match non_blank(env, DATABASE_URL_ENV) {
        Some(url) => url,
        None => assemble_database_url(env)?,
    };
    let pool_max_size = parse_or(
        env,
        DB_POOL_MAX_SIZE_ENV,
        DEFAULT_POOL_MAX_SIZE,
        "a positive integer",
    )?;
    if pool_max_size == 0 {
        return Err(SettingsError::InvalidEnv {
            name: DB_POOL_MAX_SIZE_ENV,
            value: "0".to_owned(),
            expected: "a positive integer",
        });
    }
    let timeout_secs = parse_or(
        env,
        DB_CONNECT_TIMEOUT_ENV,
        DEFAULT_CONNECT_TIMEOUT_SECS,
        "a whole number of seconds",
    )?;

    Ok(DatabaseSettings {
        url: Zeroizing::new(url),
        pool_max_size,
        connect_timeout: Duration::from_secs(timeout_secs),
    })
}

fn assemble_database_url<E: Env>(env: &E) -> Result<String, SettingsError> {
    let host = non_blank(env, DB_HOST_ENV).unwrap_or_else(|| DEFAULT_DB_HOST.to_owned());
    let port = parse_or(env, DB_PORT_ENV, DEFAULT_DB_PORT, "a port number (1-65535)")?;
    let user = required(env, DB_USER_ENV)?;
    let password = Zeroizing::new(required(env, DB_PASSWORD_ENV)?);
    let name = required(env, DB_NAME_ENV)?;

    let invalid = |name: &'static str, value: &str| SettingsError::InvalidEnv {
        name,
        value: value.to_owned(),
        expected: "a value usable in a postgres:// URL",
    };

    let mut url = Url::parse("postgres://localhost").map_err(|_| invalid(DB_HOST_ENV, &host))?;
    url.set_host(Some(&host))
        .map_err(|_| invalid(DB_HOST_ENV, &host))?;
    url.set_port(Some(port))
        .map_err(|()| invalid(DB_PORT_ENV, &port.to_string()))?;
    url.set_username(&user)
        .map_err(|()| invalid(DB_USER_ENV, &user))?;
    url.set_password(Some(password.as_str()))
        .map_err(|()| invalid(DB_PASSWORD_ENV, "<redacted>"))?;
    url.set_path(&name);
    Ok(url.into())
}

fn cors_origin_from_env<E: Env>(env: &E) -> Result<String, SettingsError> {
    let Some(origin) = non_blank(env, CORS_ORIGIN_ENV) else {
        return Ok(DEFAULT_CORS_ORIGIN.to_owned());
    };
    // Credentialed CORS cannot use a wildcard origin.
    let parsed = Url::parse(origin.trim()).ok().filter(|url| url.has_host());
    match parsed {
        Some(_) => Ok(origin.trim().trim_end_matches('/').to_owned()),
        None => Err(SettingsError::InvalidEnv {
            name: CORS_ORIGIN_ENV,
            value: origin,
            expected: "a single origin such as https://app.example.com",
        }),
    }
}

fn jwt_secret_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<Zeroizing<String>, SettingsError> {
    if let Some(secret) = non_blank(env, JWT_SECRET_ENV) {
        return Ok(Zeroizing::new(secret));
    }
    if !mode.is_debug() {
        return Err(SettingsError::MissingEnv {
            name: JWT_SECRET_ENV,
        });
    }
    warn!("JWT_SECRET not set; using an ephemeral secret, tokens will not survive restarts");
    let bytes: [u8; EPHEMERAL_SECRET_BYTES] = rand::random();
    Ok(Zeroizing::new(hex::encode(bytes)))
}

#[cfg(test)]
mod tests;
