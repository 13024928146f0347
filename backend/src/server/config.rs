//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use laborer_service::outbound::persistence::DbPool;
use laborer_service::settings::ServiceSettings;
use zeroize::Zeroizing;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) cors_origin: String,
    pub(crate) jwt_secret: Zeroizing<Vec<u8>>,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration from loaded settings and a pool.
    #[must_use]
    pub fn new(settings: &ServiceSettings, db_pool: DbPool) -> Self {
        Self {
            bind_addr: settings.bind_addr(),
            cors_origin: settings.cors_origin.clone(),
            jwt_secret: Zeroizing::new(settings.jwt_secret().to_vec()),
            db_pool,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
