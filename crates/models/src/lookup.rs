//! Read-only id/label reference tables.
//!
//! All six share one shape, so each entity module is generated by
//! `lookup_entity!`. Rows are seeded by the migration that creates the table.
use std::str::FromStr;

use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::errors::ModelError;

macro_rules! lookup_entity {
    ($module:ident, $table:tt) => {
        pub mod $module {
            use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder};
            use serde::{Deserialize, Serialize};

            #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
            #[sea_orm(table_name = $table)]
            pub struct Model {
                #[sea_orm(primary_key, auto_increment = false)]
                pub id: i32,
                #[sea_orm(unique)]
                pub label: String,
            }

            #[derive(Copy, Clone, Debug, EnumIter)]
            pub enum Relation {}

            impl RelationTrait for Relation {
                fn def(&self) -> RelationDef {
                    match *self {}
                }
            }

            impl ActiveModelBehavior for ActiveModel {}

            pub async fn rows(db: &DatabaseConnection) -> Result<Vec<super::LookupRow>, DbErr> {
                let models = Entity::find().order_by_asc(Column::Id).all(db).await?;
                Ok(models
                    .into_iter()
                    .map(|m| super::LookupRow { id: m.id, label: m.label })
                    .collect())
            }
        }
    };
}

lookup_entity!(user_type, "user_types");
lookup_entity!(business_type, "business_types");
lookup_entity!(industry_type, "industry_types");
lookup_entity!(status, "statuses");
lookup_entity!(equity_type, "equity_types");
lookup_entity!(debt_type, "debt_types");

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LookupKind {
    UserType,
    BusinessType,
    IndustryType,
    Status,
    EquityType,
    DebtType,
}

impl LookupKind {
    pub const ALL: [LookupKind; 6] = [
        LookupKind::UserType,
        LookupKind::BusinessType,
        LookupKind::IndustryType,
        LookupKind::Status,
        LookupKind::EquityType,
        LookupKind::DebtType,
    ];

    /// Path segment used by the HTTP layer, e.g. `industry-types`.
    pub fn slug(&self) -> &'static str {
        match self {
            LookupKind::UserType => "user-types",
            LookupKind::BusinessType => "business-types",
            LookupKind::IndustryType => "industry-types",
            LookupKind::Status => "statuses",
            LookupKind::EquityType => "equity-types",
            LookupKind::DebtType => "debt-types",
        }
    }

    pub fn table_name(&self) -> &'static str {
        match self {
            LookupKind::UserType => "user_types",
            LookupKind::BusinessType => "business_types",
            LookupKind::IndustryType => "industry_types",
            LookupKind::Status => "statuses",
            LookupKind::EquityType => "equity_types",
            LookupKind::DebtType => "debt_types",
        }
    }
}

impl FromStr for LookupKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LookupKind::ALL
            .into_iter()
            .find(|k| k.slug() == s)
            .ok_or_else(|| ModelError::NotFound(format!("lookup kind {s}")))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LookupRow {
    pub id: i32,
    pub label: String,
}

/// All rows of one lookup table ordered by id.
pub async fn list(db: &DatabaseConnection, kind: LookupKind) -> Result<Vec<LookupRow>, ModelError> {
    let rows = match kind {
        LookupKind::UserType => user_type::rows(db).await?,
        LookupKind::BusinessType => business_type::rows(db).await?,
        LookupKind::IndustryType => industry_type::rows(db).await?,
        LookupKind::Status => status::rows(db).await?,
        LookupKind::EquityType => equity_type::rows(db).await?,
        LookupKind::DebtType => debt_type::rows(db).await?,
    };
    Ok(rows)
}
