//! Business profiles and the projects, deals and transactions they own.
//!
//! Child operations first resolve the parent profile so an unknown profile id
//! is reported as not found rather than as a foreign-key failure.
use sea_orm::DatabaseConnection;
use tracing::info;

use models::business_profile::{self, NewBusinessProfile, ProfileWithChildren};
use models::deal::{self, NewDeal};
use models::project::{self, NewProject};
use models::transaction::{self, NewTransaction};

use crate::auth::password::hash_password;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Create a profile, storing an argon2 hash of its password.
pub async fn create_profile(
    db: &DatabaseConnection,
    input: NewBusinessProfile,
) -> Result<business_profile::Model, ServiceError> {
    let hash = hash_password(&input.password).map_err(|e| ServiceError::Internal(e.to_string()))?;
    let created = business_profile::create(db, &input, &hash).await?;
    info!(profile_id = created.id, name = %created.name, "business_profile_created");
    Ok(created)
}

/// List profiles, optionally filtered by a name substring.
pub async fn list_profiles(
    db: &DatabaseConnection,
    name: Option<&str>,
    opts: Pagination,
) -> Result<Vec<business_profile::Model>, ServiceError> {
    let (offset, limit) = opts.offset_limit();
    Ok(business_profile::list(db, name, offset, limit).await?)
}

pub async fn get_profile(db: &DatabaseConnection, id: i32) -> Result<ProfileWithChildren, ServiceError> {
    business_profile::find_with_children(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("business profile"))
}

async fn require_profile(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    business_profile::find_by_id(db, id)
        .await?
        .map(|_| ())
        .ok_or_else(|| ServiceError::not_found("business profile"))
}

pub async fn create_project(
    db: &DatabaseConnection,
    profile_id: i32,
    input: NewProject,
) -> Result<project::Model, ServiceError> {
    require_profile(db, profile_id).await?;
    let created = project::create(db, profile_id, &input).await?;
    info!(profile_id, project_id = created.id, "project_created");
    Ok(created)
}

pub async fn list_projects(db: &DatabaseConnection, profile_id: i32) -> Result<Vec<project::Model>, ServiceError> {
    require_profile(db, profile_id).await?;
    Ok(project::list_for_profile(db, profile_id).await?)
}

pub async fn create_deal(db: &DatabaseConnection, profile_id: i32, input: NewDeal) -> Result<deal::Model, ServiceError> {
    require_profile(db, profile_id).await?;
    let created = deal::create(db, profile_id, &input).await?;
    info!(profile_id, deal_id = created.id, "deal_created");
    Ok(created)
}

pub async fn list_deals(db: &DatabaseConnection, profile_id: i32) -> Result<Vec<deal::Model>, ServiceError> {
    require_profile(db, profile_id).await?;
    Ok(deal::list_for_profile(db, profile_id).await?)
}

pub async fn create_transaction(
    db: &DatabaseConnection,
    profile_id: i32,
    input: NewTransaction,
) -> Result<transaction::Model, ServiceError> {
    require_profile(db, profile_id).await?;
    let created = transaction::create(db, profile_id, &input).await?;
    info!(profile_id, transaction_id = created.id, "transaction_created");
    Ok(created)
}

pub async fn list_transactions(
    db: &DatabaseConnection,
    profile_id: i32,
) -> Result<Vec<transaction::Model>, ServiceError> {
    require_profile(db, profile_id).await?;
    Ok(transaction::list_for_profile(db, profile_id).await?)
}
