//! Create `users` table.
//!
//! Application accounts; `email` is unique so duplicate registrations fail in
//! the database even if two requests race past the service-level check.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string_len(Users::Name, 50).not_null())
                    .col(string_len(Users::Email, 255).unique_key().not_null())
                    .col(text(Users::PasswordHash).not_null())
                    .col(ColumnDef::new(Users::GradYear).integer().null())
                    .col(ColumnDef::new(Users::CurrentWork).string().null())
                    .col(boolean(Users::AdminAuth).default(false))
                    .col(ColumnDef::new(Users::Resume).blob().null())
                    .col(boolean(Users::ResumePublic).default(false))
                    .col(ColumnDef::new(Users::Roles).text().null())
                    .col(ColumnDef::new(Users::ImageUrl).string().null())
                    .col(ColumnDef::new(Users::CoverUrl).string().null())
                    .col(timestamp_with_time_zone(Users::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    GradYear,
    CurrentWork,
    AdminAuth,
    Resume,
    ResumePublic,
    Roles,
    ImageUrl,
    CoverUrl,
    CreatedAt,
}
