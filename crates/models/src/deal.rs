use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::business_profile;
use crate::errors::ModelError;
use crate::lookup::status;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "deals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub business_profile_id: i32,
    pub name: String,
    pub status_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    BusinessProfile,
    Status,
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
pub struct NewDeal {
    pub name: String,
    pub status_id: i32,
}

pub async fn create(db: &DatabaseConnection, business_profile_id: i32, input: &NewDeal) -> Result<Model, ModelError> {
    if input.name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    let am = ActiveModel {
        business_profile_id: Set(business_profile_id),
        name: Set(input.name.clone()),
        status_id: Set(input.status_id),
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
