//! Service entry-point: loads configuration, wires adapters, and serves HTTP.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use laborer_service::inbound::http::health::HealthState;
use laborer_service::outbound::persistence::DbPool;
use laborer_service::settings::{BuildMode, ServiceSettings};
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let dotenv = dotenvy::dotenv();

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "failed to load environment file"),
    }

    let settings = ServiceSettings::from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    info!(
        pool_max_size = settings.database.pool_max_size(),
        connect_timeout = ?settings.database.connect_timeout(),
        "connecting to laborer store"
    );

    let pool = DbPool::new(settings.database.pool_config())
        .await
        .map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(&settings, pool))?;

    let result = server.await;
    health_state.mark_draining();
    info!("laborer service stopped");
    result
}
