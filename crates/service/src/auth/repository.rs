use async_trait::async_trait;

use super::domain::{AuthUser, Credentials};
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError>;
    async fn find_user_by_id(&self, id: i32) -> Result<Option<AuthUser>, AuthError>;
    async fn get_credentials(&self, user_id: i32) -> Result<Option<Credentials>, AuthError>;

    /// Must fail with [`AuthError::Conflict`] when the email is taken.
    async fn create_user(&self, name: &str, email: &str, password_hash: &str) -> Result<AuthUser, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAuthRepository {
        users: Mutex<HashMap<String, (AuthUser, String)>>, // key: email, value: (user, hash)
    }

    impl MockAuthRepository {
        fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, (AuthUser, String)>>, AuthError> {
            self.users.lock().map_err(|e| AuthError::Repository(e.to_string()))
        }

        /// Drop a user; tokens naming it stop refreshing.
        pub fn remove(&self, email: &str) {
            if let Ok(mut users) = self.users.lock() {
                users.remove(email);
            }
        }

        pub fn stored_hash(&self, email: &str) -> Option<String> {
            self.users.lock().ok()?.get(email).map(|(_, h)| h.clone())
        }
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError> {
            Ok(self.lock()?.get(email).map(|(u, _)| u.clone()))
        }

        async fn find_user_by_id(&self, id: i32) -> Result<Option<AuthUser>, AuthError> {
            Ok(self.lock()?.values().find(|(u, _)| u.id == id).map(|(u, _)| u.clone()))
        }

        async fn get_credentials(&self, user_id: i32) -> Result<Option<Credentials>, AuthError> {
            Ok(self
                .lock()?
                .values()
                .find(|(u, _)| u.id == user_id)
                .map(|(u, h)| Credentials { user_id: u.id, password_hash: h.clone() }))
        }

        async fn create_user(&self, name: &str, email: &str, password_hash: &str) -> Result<AuthUser, AuthError> {
            let mut users = self.lock()?;
            if users.contains_key(email) {
                return Err(AuthError::Conflict);
            }
            let id = users.values().map(|(u, _)| u.id).max().unwrap_or(0) + 1;
            let user = AuthUser { id, email: email.to_string(), name: name.to_string() };
            users.insert(email.to_string(), (user.clone(), password_hash.to_string()));
            Ok(user)
        }
    }
}
