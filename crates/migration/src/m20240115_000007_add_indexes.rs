use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children are always listed per profile
        manager
            .create_index(
                Index::create()
                    .name("idx_project_business_profile")
                    .table(Projects::Table)
                    .col(Projects::BusinessProfileId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_deal_business_profile")
                    .table(Deals::Table)
                    .col(Deals::BusinessProfileId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_transaction_business_profile")
                    .table(Transactions::Table)
                    .col(Transactions::BusinessProfileId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_project_business_profile").table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_deal_business_profile").table(Deals::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_transaction_business_profile").table(Transactions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects { Table, BusinessProfileId }

#[derive(DeriveIden)]
enum Deals { Table, BusinessProfileId }

#[derive(DeriveIden)]
enum Transactions { Table, BusinessProfileId }
