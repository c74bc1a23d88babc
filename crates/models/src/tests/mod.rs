/// Migration and seed data tests
pub mod seed_tests;

/// CRUD and constraint tests for the entities
pub mod crud_tests;

use sea_orm::DatabaseConnection;

/// Fresh in-memory database with every migration applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = crate::db::connect_sqlite_memory().await?;
    crate::db::migrate(&db).await?;
    Ok(db)
}
