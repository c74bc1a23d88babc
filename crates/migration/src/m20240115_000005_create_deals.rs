//! Create `deals` table: a named, status-tracked child of a business profile.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Deals::Table)
                    .if_not_exists()
                    .col(pk_auto(Deals::Id))
                    .col(integer(Deals::BusinessProfileId).not_null())
                    .col(string(Deals::Name).not_null())
                    .col(integer(Deals::StatusId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deal_business_profile")
                            .from(Deals::Table, Deals::BusinessProfileId)
                            .to(BusinessProfiles::Table, BusinessProfiles::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deal_status")
                            .from(Deals::Table, Deals::StatusId)
                            .to(Statuses::Table, Statuses::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Deals::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Deals { Table, Id, BusinessProfileId, Name, StatusId }

#[derive(DeriveIden)]
enum BusinessProfiles { Table, Id }

#[derive(DeriveIden)]
enum Statuses { Table, Id }
