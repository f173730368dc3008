use std::{future::Future, net::SocketAddr, time::Duration};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Host/port from the loaded config as a socket address.
pub fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    let s = &cfg.server;
    Ok(format!("{}:{}", s.host, s.port).parse()?)
}

/// Connect to the configured database and bring the schema up to date.
pub async fn prepare_database(cfg: &AppConfig) -> Result<DatabaseConnection, StartupError> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Runtime(format!("migrations failed: {e}")))?;
    info!("database migrations applied");
    Ok(db)
}

/// Router over an already-prepared database.
pub fn build_app(db: DatabaseConnection, cfg: &AppConfig) -> Router {
    let state = AppState::new(db, Duration::from_millis(cfg.server.slow_delay_ms));
    routes::build_router(state, build_cors())
}

/// Serve `cfg`'s router on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, cfg: &AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let db = prepare_database(cfg).await?;
    let app = build_app(db, cfg);
    info!(addr = %listener.local_addr()?, slow_delay_ms = cfg.server.slow_delay_ms, "serving user api");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("in-flight requests drained");
    Ok(())
}

/// Public entry: bind the configured address and serve until `shutdown` resolves.
/// The caller owns logging init and config loading.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = bind_addr(&cfg)?;
    let listener = TcpListener::bind(addr).await?;
    serve(listener, &cfg, shutdown).await
}
