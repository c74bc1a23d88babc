//! Create the six id/label lookup tables and seed each one immediately.
//!
//! Seeding lives in the same migration as the DDL so it runs exactly once per
//! database; `ON CONFLICT DO NOTHING` keeps a replayed seed from duplicating.
use sea_orm_migration::{prelude::*, schema::*};

use crate::seed::LOOKUP_TABLES;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (table, rows) in LOOKUP_TABLES {
            manager
                .create_table(
                    Table::create()
                        .table(Alias::new(*table))
                        .if_not_exists()
                        .col(integer(Lookup::Id).primary_key())
                        .col(string_len(Lookup::Label, 64).unique_key().not_null())
                        .to_owned(),
                )
                .await?;
            seed(manager, table, rows).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (table, _) in LOOKUP_TABLES.iter().rev() {
            manager
                .drop_table(Table::drop().table(Alias::new(*table)).if_exists().to_owned())
                .await?;
        }
        Ok(())
    }
}

/// Insert every lookup table's seed rows, skipping ids already present.
pub async fn seed_lookup_tables(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    for (table, rows) in LOOKUP_TABLES {
        seed(manager, table, rows).await?;
    }
    Ok(())
}

async fn seed(manager: &SchemaManager<'_>, table: &str, rows: &[(i32, &str)]) -> Result<(), DbErr> {
    let mut insert = Query::insert();
    insert
        .into_table(Alias::new(table))
        .columns([Lookup::Id, Lookup::Label])
        .on_conflict(OnConflict::column(Lookup::Id).do_nothing().to_owned());
    for (id, label) in rows {
        insert
            .values([(*id).into(), (*label).into()])
            .map_err(|e| DbErr::Custom(format!("seed {table}: {e}")))?;
    }
    manager.exec_stmt(insert).await
}

#[derive(DeriveIden)]
enum Lookup { Id, Label }
