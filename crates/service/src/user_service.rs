use sea_orm::DatabaseConnection;
use serde::Serialize;

use models::user;
use crate::errors::ServiceError;

/// Public view of a user. The password hash never leaves the service layer and
/// the resume is only included when its owner marked it public.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserView {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub grad_year: Option<i32>,
    pub current_work: Option<String>,
    pub admin_auth: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<Vec<u8>>,
    pub resume_public: bool,
    pub roles: Vec<String>,
    pub image_url: Option<String>,
    pub cover_url: Option<String>,
    pub created_at: String,
}

impl From<user::Model> for UserView {
    fn from(u: user::Model) -> Self {
        let roles = u.rolenames();
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            grad_year: u.grad_year,
            current_work: u.current_work,
            admin_auth: u.admin_auth,
            resume: u.resume.filter(|_| u.resume_public),
            resume_public: u.resume_public,
            roles,
            image_url: u.image_url,
            cover_url: u.cover_url,
            created_at: u.created_at.to_rfc3339(),
        }
    }
}

/// All users, oldest first.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<UserView>, ServiceError> {
    let users = user::list(db).await?;
    Ok(users.into_iter().map(UserView::from).collect())
}

/// Get a user by id.
pub async fn get_user(db: &DatabaseConnection, id: i32) -> Result<UserView, ServiceError> {
    user::find_by_id(db, id)
        .await?
        .map(UserView::from)
        .ok_or_else(|| ServiceError::not_found("user"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use sea_orm::{ActiveModelTrait, IntoActiveModel, Set};

    #[tokio::test]
    async fn listing_hides_hash_and_private_resume() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let ann = user::create(&db, "Ann", "ann@example.com", "$argon2id$secret").await?;
        let bob = user::create(&db, "Bob", "bob@example.com", "$argon2id$other").await?;

        let mut am = ann.into_active_model();
        am.resume = Set(Some(b"cv".to_vec()));
        am.roles = Set(Some("mentor,founder".into()));
        am.update(&db).await?;
        let mut am = bob.into_active_model();
        am.resume = Set(Some(b"public cv".to_vec()));
        am.resume_public = Set(true);
        am.update(&db).await?;

        let views = list_users(&db).await?;
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].roles, vec!["mentor".to_string(), "founder".to_string()]);
        assert_eq!(views[0].resume, None);
        assert_eq!(views[1].resume.as_deref(), Some(&b"public cv"[..]));

        let json = serde_json::to_string(&views)?;
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password"));
        Ok(())
    }

    #[tokio::test]
    async fn get_missing_user_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(matches!(get_user(&db, 404).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
