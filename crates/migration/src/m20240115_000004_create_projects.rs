//! Create `projects` table.
//!
//! Each project hangs off one business profile. `equity_type_id` and
//! `debt_type_id` are nullable; they are only meaningful when the matching
//! `funded_by_*` flag is set.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(pk_auto(Projects::Id))
                    .col(integer(Projects::BusinessProfileId).not_null())
                    .col(integer(Projects::StatusId).not_null())
                    .col(text(Projects::Description).not_null())
                    .col(string(Projects::Region).not_null())
                    .col(string(Projects::Country).not_null())
                    .col(integer(Projects::IndustryTypeId).not_null())
                    .col(boolean(Projects::FundedByEquity).default(false))
                    .col(ColumnDef::new(Projects::EquityTypeId).integer().null())
                    .col(boolean(Projects::FundedByDebt).default(false))
                    .col(ColumnDef::new(Projects::DebtTypeId).integer().null())
                    .col(big_integer(Projects::Revenue).default(0))
                    .col(big_integer(Projects::Ebitda).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_business_profile")
                            .from(Projects::Table, Projects::BusinessProfileId)
                            .to(BusinessProfiles::Table, BusinessProfiles::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_status")
                            .from(Projects::Table, Projects::StatusId)
                            .to(Statuses::Table, Statuses::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_industry_type")
                            .from(Projects::Table, Projects::IndustryTypeId)
                            .to(IndustryTypes::Table, IndustryTypes::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_equity_type")
                            .from(Projects::Table, Projects::EquityTypeId)
                            .to(EquityTypes::Table, EquityTypes::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_debt_type")
                            .from(Projects::Table, Projects::DebtTypeId)
                            .to(DebtTypes::Table, DebtTypes::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Projects::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    BusinessProfileId,
    StatusId,
    Description,
    Region,
    Country,
    IndustryTypeId,
    FundedByEquity,
    EquityTypeId,
    FundedByDebt,
    DebtTypeId,
    Revenue,
    Ebitda,
}

#[derive(DeriveIden)]
enum BusinessProfiles { Table, Id }

#[derive(DeriveIden)]
enum Statuses { Table, Id }

#[derive(DeriveIden)]
enum IndustryTypes { Table, Id }

#[derive(DeriveIden)]
enum EquityTypes { Table, Id }

#[derive(DeriveIden)]
enum DebtTypes { Table, Id }
