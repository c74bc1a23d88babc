use anyhow::Result;
use migration::seed;
use sea_orm::{ConnectionTrait, Statement};

use super::setup_test_db;
use crate::lookup::{self, LookupKind, LookupRow};

fn expected(rows: &[(i32, &str)]) -> Vec<LookupRow> {
    rows.iter().map(|(id, label)| LookupRow { id: *id, label: label.to_string() }).collect()
}

async fn count(db: &sea_orm::DatabaseConnection, table: &str) -> Result<i64> {
    let backend = db.get_database_backend();
    let row = db
        .query_one(Statement::from_string(backend, format!("SELECT COUNT(*) AS n FROM {table}")))
        .await?
        .ok_or_else(|| anyhow::anyhow!("no count row"))?;
    Ok(row.try_get("", "n")?)
}

#[tokio::test]
async fn lookup_tables_hold_exactly_the_seed_rows() -> Result<()> {
    let db = setup_test_db().await?;

    assert_eq!(lookup::list(&db, LookupKind::UserType).await?, expected(seed::USER_TYPES));
    assert_eq!(lookup::list(&db, LookupKind::BusinessType).await?, expected(seed::BUSINESS_TYPES));
    assert_eq!(lookup::list(&db, LookupKind::IndustryType).await?, expected(seed::INDUSTRY_TYPES));
    assert_eq!(lookup::list(&db, LookupKind::Status).await?, expected(seed::STATUSES));
    assert_eq!(lookup::list(&db, LookupKind::EquityType).await?, expected(seed::EQUITY_TYPES));
    assert_eq!(lookup::list(&db, LookupKind::DebtType).await?, expected(seed::DEBT_TYPES));

    let statuses = lookup::list(&db, LookupKind::Status).await?;
    assert_eq!(statuses[5], LookupRow { id: 6, label: "Non-Active".into() });
    Ok(())
}

async fn assert_seed_counts(db: &sea_orm::DatabaseConnection) -> Result<()> {
    for (table, rows) in seed::LOOKUP_TABLES {
        assert_eq!(count(db, table).await?, rows.len() as i64, "row count of {table}");
    }
    Ok(())
}

#[tokio::test]
async fn migrating_twice_does_not_duplicate_seeds() -> Result<()> {
    let db = setup_test_db().await?;
    crate::db::migrate(&db).await?;
    assert_seed_counts(&db).await?;
    assert_eq!(count(&db, "statuses").await?, 6);
    assert_eq!(count(&db, "debt_types").await?, 3);
    Ok(())
}

#[tokio::test]
async fn replayed_seed_skips_existing_rows() -> Result<()> {
    let db = setup_test_db().await?;
    let manager = migration::SchemaManager::new(&db);
    migration::seed_lookup_tables(&manager).await?;
    assert_seed_counts(&db).await?;
    assert_eq!(lookup::list(&db, LookupKind::EquityType).await?, expected(seed::EQUITY_TYPES));
    Ok(())
}

#[test]
fn lookup_kind_parses_path_slugs() {
    assert_eq!("industry-types".parse::<LookupKind>().ok(), Some(LookupKind::IndustryType));
    assert_eq!("statuses".parse::<LookupKind>().ok(), Some(LookupKind::Status));
    assert!("industry_types".parse::<LookupKind>().is_err());
    for kind in LookupKind::ALL {
        assert_eq!(kind.slug().parse::<LookupKind>().ok(), Some(kind));
    }
}
