use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

/// Lifetime and idle timeout for the in-memory pool. sqlx adds the reaper period
/// to `Instant::now()`, so this stays far below `Duration::MAX`.
pub const IN_MEMORY_KEEPALIVE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Pool options for `cfg`.
///
/// In-memory SQLite is pinned to a single connection that is never recycled:
/// each new connection would open a different, empty database.
pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);

    if cfg.is_in_memory_sqlite() {
        opt.max_connections(1)
            .min_connections(1)
            .idle_timeout(IN_MEMORY_KEEPALIVE)
            .max_lifetime(IN_MEMORY_KEEPALIVE);
    } else {
        opt.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    opt
}

/// Build the connection pool described by `cfg`.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg)).await?;
    info!(backend = ?db.get_database_backend(), in_memory = cfg.is_in_memory_sqlite(), "database connected");
    Ok(db)
}

/// Round-trip a trivial statement to confirm the pool can serve queries.
pub async fn ping(db: &DatabaseConnection) -> anyhow::Result<()> {
    db.ping().await?;
    Ok(())
}
