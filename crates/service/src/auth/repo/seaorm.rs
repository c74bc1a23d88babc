use sea_orm::DatabaseConnection;

use crate::auth::domain::{AuthUser, Credentials};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;
use models::errors::ModelError;
use models::user;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAuthRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn to_auth_user(u: user::Model) -> AuthUser {
    AuthUser { id: u.id, email: u.email, name: u.name }
}

fn repo_err(e: ModelError) -> AuthError {
    match e {
        ModelError::Conflict(_) => AuthError::Conflict,
        ModelError::Validation(m) => AuthError::Validation(m),
        other => AuthError::Repository(other.to_string()),
    }
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError> {
        let res = user::find_by_email(&self.db, email).await.map_err(repo_err)?;
        Ok(res.map(to_auth_user))
    }

    async fn find_user_by_id(&self, id: i32) -> Result<Option<AuthUser>, AuthError> {
        let res = user::find_by_id(&self.db, id).await.map_err(repo_err)?;
        Ok(res.map(to_auth_user))
    }

    async fn get_credentials(&self, user_id: i32) -> Result<Option<Credentials>, AuthError> {
        let res = user::find_by_id(&self.db, user_id).await.map_err(repo_err)?;
        Ok(res.map(|u| Credentials { user_id: u.id, password_hash: u.password_hash }))
    }

    async fn create_user(&self, name: &str, email: &str, password_hash: &str) -> Result<AuthUser, AuthError> {
        let created = user::create(&self.db, name, email, password_hash).await.map_err(repo_err)?;
        Ok(to_auth_user(created))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn duplicate_email_maps_to_conflict() -> Result<(), anyhow::Error> {
        let repo = SeaOrmAuthRepository::new(get_db().await?);
        let u = repo.create_user("Ann", "ann@example.com", "h").await?;
        assert_eq!(repo.find_user_by_id(u.id).await?, Some(u.clone()));
        assert!(matches!(repo.create_user("Ann", "ann@example.com", "h2").await, Err(AuthError::Conflict)));
        let creds = repo.get_credentials(u.id).await?.ok_or_else(|| anyhow::anyhow!("no creds"))?;
        assert_eq!(creds.password_hash, "h");
        Ok(())
    }
}
