use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub grad_year: Option<i32>,
    pub current_work: Option<String>,
    pub admin_auth: bool,
    #[serde(skip_serializing)]
    pub resume: Option<Vec<u8>>,
    pub resume_public: bool,
    /// Comma-separated role names.
    pub roles: Option<String>,
    pub image_url: Option<String>,
    pub cover_url: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn rolenames(&self) -> Vec<String> {
        self.roles
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect()
    }
}

pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<Model, ModelError> {
    if email.trim().is_empty() {
        return Err(ModelError::Validation("email required".into()));
    }
    if password_hash.is_empty() {
        return Err(ModelError::Validation("password hash required".into()));
    }
    let am = ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        password_hash: Set(password_hash.to_string()),
        grad_year: Set(None),
        current_work: Set(None),
        admin_auth: Set(false),
        resume: Set(None),
        resume_public: Set(false),
        roles: Set(None),
        image_url: Set(None),
        cover_url: Set(None),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Email.eq(email)).one(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}
