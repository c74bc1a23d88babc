#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Fresh migrated in-memory database; every test gets its own.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_sqlite_memory().await?;
    models::db::migrate(&db).await?;
    Ok(db)
}
