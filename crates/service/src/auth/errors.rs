use thiserror::Error;

/// Business errors for auth workflows
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("user already exists")]
    Conflict,
    #[error("user not found")]
    NotFound,
    #[error("invalid credentials")]
    Unauthorized,
    #[error("token expired")]
    Expired,
    #[error("token can no longer be refreshed")]
    RefreshWindowClosed,
    #[error("hashing error: {0}")]
    HashError(String),
    #[error("token error: {0}")]
    TokenError(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::Validation(_) => 1001,
            AuthError::Conflict => 1002,
            AuthError::NotFound => 1003,
            AuthError::Unauthorized => 1004,
            AuthError::Expired => 1005,
            AuthError::RefreshWindowClosed => 1006,
            AuthError::HashError(_) => 1101,
            AuthError::TokenError(_) => 1102,
            AuthError::Repository(_) => 1200,
        }
    }

    /// True for failures caused by the presented token rather than the server.
    pub fn is_token_rejection(&self) -> bool {
        matches!(
            self,
            AuthError::Expired | AuthError::RefreshWindowClosed | AuthError::TokenError(_) | AuthError::NotFound
        )
    }
}
