//! Create `business_profiles` table with FKs to the user/business/industry
//! type lookups. Both `name` and `email` are unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusinessProfiles::Table)
                    .if_not_exists()
                    .col(pk_auto(BusinessProfiles::Id))
                    .col(string_len(BusinessProfiles::Name, 20).unique_key().not_null())
                    .col(string(BusinessProfiles::Country).not_null())
                    .col(string(BusinessProfiles::PhoneNumber).not_null())
                    .col(integer(BusinessProfiles::UserTypeId).not_null())
                    .col(integer(BusinessProfiles::BusinessTypeId).not_null())
                    .col(string(BusinessProfiles::HeardAboutBy).not_null())
                    .col(string_len(BusinessProfiles::Email, 255).unique_key().not_null())
                    .col(boolean(BusinessProfiles::EmailVerified).default(false))
                    .col(text(BusinessProfiles::Password).not_null())
                    .col(ColumnDef::new(BusinessProfiles::Website).string().null())
                    .col(string(BusinessProfiles::BusinessSize).not_null())
                    .col(string(BusinessProfiles::CountryCode).not_null())
                    .col(ColumnDef::new(BusinessProfiles::OfficePhoneNumber).string().null())
                    .col(string(BusinessProfiles::AddressLine1).not_null())
                    .col(string(BusinessProfiles::AddressLine2).not_null())
                    .col(string(BusinessProfiles::City).not_null())
                    .col(string(BusinessProfiles::PostCode).not_null())
                    .col(ColumnDef::new(BusinessProfiles::Description).text().null())
                    .col(integer(BusinessProfiles::IndustryTypeId).not_null())
                    .col(timestamp_with_time_zone(BusinessProfiles::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_profile_user_type")
                            .from(BusinessProfiles::Table, BusinessProfiles::UserTypeId)
                            .to(UserTypes::Table, UserTypes::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_profile_business_type")
                            .from(BusinessProfiles::Table, BusinessProfiles::BusinessTypeId)
                            .to(BusinessTypes::Table, BusinessTypes::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_profile_industry_type")
                            .from(BusinessProfiles::Table, BusinessProfiles::IndustryTypeId)
                            .to(IndustryTypes::Table, IndustryTypes::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BusinessProfiles::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BusinessProfiles {
    Table,
    Id,
    Name,
    Country,
    PhoneNumber,
    UserTypeId,
    BusinessTypeId,
    HeardAboutBy,
    Email,
    EmailVerified,
    Password,
    Website,
    BusinessSize,
    CountryCode,
    OfficePhoneNumber,
    AddressLine1,
    AddressLine2,
    City,
    PostCode,
    Description,
    IndustryTypeId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum UserTypes { Table, Id }

#[derive(DeriveIden)]
enum BusinessTypes { Table, Id }

#[derive(DeriveIden)]
enum IndustryTypes { Table, Id }
