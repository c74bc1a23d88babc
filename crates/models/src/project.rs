use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::business_profile;
use crate::errors::ModelError;
use crate::lookup::{debt_type, equity_type, industry_type, status};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub business_profile_id: i32,
    pub status_id: i32,
    pub description: String,
    pub region: String,
    pub country: String,
    pub industry_type_id: i32,
    pub funded_by_equity: bool,
    pub equity_type_id: Option<i32>,
    pub funded_by_debt: bool,
    pub debt_type_id: Option<i32>,
    pub revenue: i64,
    pub ebitda: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    BusinessProfile,
    Status,
    IndustryType,
    EquityType,
    DebtType,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::BusinessProfile => Entity::belongs_to(business_profile::Entity)
                .from(Column::BusinessProfileId)
                .to(business_profile::Column::Id)
                .into(),
            Relation::Status => Entity::belongs_to(status::Entity)
                .from(Column::StatusId)
                .to(status::Column::Id)
                .into(),
            Relation::IndustryType => Entity::belongs_to(industry_type::Entity)
                .from(Column::IndustryTypeId)
                .to(industry_type::Column::Id)
                .into(),
            Relation::EquityType => Entity::belongs_to(equity_type::Entity)
                .from(Column::EquityTypeId)
                .to(equity_type::Column::Id)
                .into(),
            Relation::DebtType => Entity::belongs_to(debt_type::Entity)
                .from(Column::DebtTypeId)
                .to(debt_type::Column::Id)
                .into(),
        }
    }
}

impl Related<business_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize)]
pub struct NewProject {
    pub status_id: i32,
    pub description: String,
    pub region: String,
    pub country: String,
    pub industry_type_id: i32,
    #[serde(default)]
    pub funded_by_equity: bool,
    #[serde(default)]
    pub equity_type_id: Option<i32>,
    #[serde(default)]
    pub funded_by_debt: bool,
    #[serde(default)]
    pub debt_type_id: Option<i32>,
    #[serde(default)]
    pub revenue: i64,
    #[serde(default)]
    pub ebitda: i64,
}

/// Each funding flag gates its type reference: a type id sent alongside a
/// false flag is dropped.
pub async fn create(
    db: &DatabaseConnection,
    business_profile_id: i32,
    input: &NewProject,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        business_profile_id: Set(business_profile_id),
        status_id: Set(input.status_id),
        description: Set(input.description.clone()),
        region: Set(input.region.clone()),
        country: Set(input.country.clone()),
        industry_type_id: Set(input.industry_type_id),
        funded_by_equity: Set(input.funded_by_equity),
        equity_type_id: Set(input.equity_type_id.filter(|_| input.funded_by_equity)),
        funded_by_debt: Set(input.funded_by_debt),
        debt_type_id: Set(input.debt_type_id.filter(|_| input.funded_by_debt)),
        revenue: Set(input.revenue),
        ebitda: Set(input.ebitda),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn list_for_profile(db: &DatabaseConnection, business_profile_id: i32) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::BusinessProfileId.eq(business_profile_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}
