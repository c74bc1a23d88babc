use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("unknown reference: {0}")]
    ForeignKey(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(m) => ServiceError::Validation(m),
            ModelError::Conflict(m) => ServiceError::Conflict(m),
            ModelError::ForeignKey(m) => ServiceError::ForeignKey(m),
            ModelError::NotFound(m) => ServiceError::NotFound(m),
            ModelError::Db(m) => ServiceError::Db(m),
        }
    }
}
