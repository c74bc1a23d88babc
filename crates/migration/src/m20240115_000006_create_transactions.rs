//! Create `transactions` table: a named, status-tracked child of a business profile.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(pk_auto(Transactions::Id))
                    .col(integer(Transactions::BusinessProfileId).not_null())
                    .col(string(Transactions::Name).not_null())
                    .col(integer(Transactions::StatusId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transaction_business_profile")
                            .from(Transactions::Table, Transactions::BusinessProfileId)
                            .to(BusinessProfiles::Table, BusinessProfiles::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transaction_status")
                            .from(Transactions::Table, Transactions::StatusId)
                            .to(Statuses::Table, Statuses::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Transactions::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Transactions { Table, Id, BusinessProfileId, Name, StatusId }

#[derive(DeriveIden)]
enum BusinessProfiles { Table, Id }

#[derive(DeriveIden)]
enum Statuses { Table, Id }
