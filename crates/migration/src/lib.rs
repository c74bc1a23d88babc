//! Migrator registering entity-specific migrations in dependency order:
//! lookups (with their seed rows) first, then users and business profiles,
//! then profile children. Indexes are applied last.
pub use sea_orm_migration::prelude::*;

pub mod seed;

mod m20240115_000001_create_lookup_tables;
mod m20240115_000002_create_users;
mod m20240115_000003_create_business_profiles;
mod m20240115_000004_create_projects;
mod m20240115_000005_create_deals;
mod m20240115_000006_create_transactions;
mod m20240115_000007_add_indexes;

pub use m20240115_000001_create_lookup_tables::seed_lookup_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240115_000001_create_lookup_tables::Migration),
            Box::new(m20240115_000002_create_users::Migration),
            Box::new(m20240115_000003_create_business_profiles::Migration),
            Box::new(m20240115_000004_create_projects::Migration),
            Box::new(m20240115_000005_create_deals::Migration),
            Box::new(m20240115_000006_create_transactions::Migration),
            // Indexes should always be applied last
            Box::new(m20240115_000007_add_indexes::Migration),
        ]
    }
}
