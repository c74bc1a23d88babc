use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::auth::{repo::SeaOrmAuthRepository, AuthConfig, AuthService};

/// Shared, immutable per-process state cloned into every handler.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: Arc<AuthService<SeaOrmAuthRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, auth: AuthConfig) -> Self {
        let repo = Arc::new(SeaOrmAuthRepository::new(db.clone()));
        Self { db, auth: Arc::new(AuthService::new(repo, auth)) }
    }
}
