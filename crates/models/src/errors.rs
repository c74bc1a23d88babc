use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("unknown reference: {0}")]
    ForeignKey(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => ModelError::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => ModelError::ForeignKey(msg),
            _ => match e {
                DbErr::RecordNotFound(msg) => ModelError::NotFound(msg),
                other => ModelError::Db(other.to_string()),
            },
        }
    }
}
