use std::time::Duration;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Open a pool using the limits and timeouts from `DatabaseConfig`.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    info!(max = cfg.max_connections, min = cfg.min_connections, "database pool ready");
    Ok(db)
}

/// Private in-memory SQLite database. A single connection keeps every query
/// on the same memory store.
pub async fn connect_sqlite_memory() -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_string());
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    Ok(Database::connect(opts).await?)
}

/// Apply pending migrations. Already-applied ones are skipped, so lookup seeds
/// are never inserted twice.
pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
    migration::Migrator::up(db, None).await?;
    Ok(())
}
