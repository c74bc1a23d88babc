use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::lookup::{business_type, industry_type, user_type};
use crate::{deal, project, transaction};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "business_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub country: String,
    pub phone_number: String,
    pub user_type_id: i32,
    pub business_type_id: i32,
    pub heard_about_by: String,
    #[sea_orm(unique)]
    pub email: String,
    pub email_verified: bool,
    #[serde(skip_serializing)]
    pub password: String,
    pub website: Option<String>,
    pub business_size: String,
    pub country_code: String,
    pub office_phone_number: Option<String>,
    #[serde(rename = "address_line_1")]
    pub address_line1: String,
    #[serde(rename = "address_line_2")]
    pub address_line2: String,
    pub city: String,
    pub post_code: String,
    pub description: Option<String>,
    pub industry_type_id: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    UserType,
    BusinessType,
    IndustryType,
    Project,
    Deal,
    Transaction,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::UserType => Entity::belongs_to(user_type::Entity)
                .from(Column::UserTypeId)
                .to(user_type::Column::Id)
                .into(),
            Relation::BusinessType => Entity::belongs_to(business_type::Entity)
                .from(Column::BusinessTypeId)
                .to(business_type::Column::Id)
                .into(),
            Relation::IndustryType => Entity::belongs_to(industry_type::Entity)
                .from(Column::IndustryTypeId)
                .to(industry_type::Column::Id)
                .into(),
            Relation::Project => Entity::has_many(project::Entity).into(),
            Relation::Deal => Entity::has_many(deal::Entity).into(),
            Relation::Transaction => Entity::has_many(transaction::Entity).into(),
        }
    }
}

impl Related<project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl Related<deal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deal.def()
    }
}

impl Related<transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted when a profile is created. `password` is plain text here;
/// callers hash it before [`create`].
#[derive(Clone, Debug, Deserialize)]
pub struct NewBusinessProfile {
    pub name: String,
    pub country: String,
    pub phone_number: String,
    pub user_type_id: i32,
    pub business_type_id: i32,
    pub heard_about_by: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub website: Option<String>,
    pub business_size: String,
    pub country_code: String,
    #[serde(default)]
    pub office_phone_number: Option<String>,
    #[serde(rename = "address_line_1")]
    pub address_line1: String,
    #[serde(rename = "address_line_2", default)]
    pub address_line2: String,
    pub city: String,
    pub post_code: String,
    #[serde(default)]
    pub description: Option<String>,
    pub industry_type_id: i32,
}

pub async fn create(
    db: &DatabaseConnection,
    input: &NewBusinessProfile,
    password_hash: &str,
) -> Result<Model, ModelError> {
    if input.name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if input.name.chars().count() > 20 {
        return Err(ModelError::Validation("name must be at most 20 characters".into()));
    }
    let am = ActiveModel {
        name: Set(input.name.clone()),
        country: Set(input.country.clone()),
        phone_number: Set(input.phone_number.clone()),
        user_type_id: Set(input.user_type_id),
        business_type_id: Set(input.business_type_id),
        heard_about_by: Set(input.heard_about_by.clone()),
        email: Set(input.email.clone()),
        email_verified: Set(false),
        password: Set(password_hash.to_string()),
        website: Set(input.website.clone()),
        business_size: Set(input.business_size.clone()),
        country_code: Set(input.country_code.clone()),
        office_phone_number: Set(input.office_phone_number.clone()),
        address_line1: Set(input.address_line1.clone()),
        address_line2: Set(input.address_line2.clone()),
        city: Set(input.city.clone()),
        post_code: Set(input.post_code.clone()),
        description: Set(input.description.clone()),
        industry_type_id: Set(input.industry_type_id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Profiles ordered by id, optionally narrowed to names containing `name`.
pub async fn list(
    db: &DatabaseConnection,
    name: Option<&str>,
    offset: u64,
    limit: u64,
) -> Result<Vec<Model>, ModelError> {
    let mut q = Entity::find();
    if let Some(n) = name.filter(|n| !n.trim().is_empty()) {
        q = q.filter(Column::Name.contains(n.trim()));
    }
    Ok(q.order_by_asc(Column::Id).offset(offset).limit(limit).all(db).await?)
}

/// A profile together with everything it owns.
#[derive(Clone, Debug, Serialize)]
pub struct ProfileWithChildren {
    #[serde(flatten)]
    pub profile: Model,
    pub projects: Vec<project::Model>,
    pub deals: Vec<deal::Model>,
    pub transactions: Vec<transaction::Model>,
}

pub async fn find_with_children(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<ProfileWithChildren>, ModelError> {
    let Some(profile) = find_by_id(db, id).await? else {
        return Ok(None);
    };
    let projects = profile.find_related(project::Entity).order_by_asc(project::Column::Id).all(db).await?;
    let deals = profile.find_related(deal::Entity).order_by_asc(deal::Column::Id).all(db).await?;
    let transactions = profile
        .find_related(transaction::Entity)
        .order_by_asc(transaction::Column::Id)
        .all(db)
        .await?;
    Ok(Some(ProfileWithChildren { profile, projects, deals, transactions }))
}
