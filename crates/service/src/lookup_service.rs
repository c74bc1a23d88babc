use sea_orm::DatabaseConnection;

use models::lookup::{self, LookupKind, LookupRow};
use crate::errors::ServiceError;

/// Rows of the lookup table addressed by its URL slug (`statuses`, `debt-types`, ...).
pub async fn list_lookup(db: &DatabaseConnection, slug: &str) -> Result<Vec<LookupRow>, ServiceError> {
    let kind: LookupKind = slug.parse()?;
    Ok(lookup::list(db, kind).await?)
}
