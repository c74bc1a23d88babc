use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::Message;
use service::auth::errors::AuthError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Errors a handler can return; each variant fixes the status and body shape.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Plain-text 401 for failed logins.
    #[error("Login unsuccessful")]
    LoginFailed,
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// Token guard rejection, rendered as `{"message": ...}`.
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("internal error: {0}")]
    Internal(String),
}

fn json_error(status: StatusCode, msg: String) -> Response {
    (status, Json(serde_json::json!({"error": msg}))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::LoginFailed => (StatusCode::UNAUTHORIZED, "Login unsuccessful").into_response(),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, Json(Message::new(msg))).into_response(),
            ApiError::BadRequest(msg) => json_error(StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => json_error(StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => json_error(StatusCode::CONFLICT, msg),
            ApiError::Internal(detail) => {
                error!(error = %detail, "request failed");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".into())
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(m) | ServiceError::ForeignKey(m) => ApiError::BadRequest(m),
            ServiceError::NotFound(m) => ApiError::NotFound(m),
            ServiceError::Conflict(m) => ApiError::Conflict(m),
            ServiceError::Db(m) | ServiceError::Internal(m) => ApiError::Internal(m),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Unauthorized => ApiError::LoginFailed,
            AuthError::Conflict => ApiError::Conflict("User already exists".into()),
            AuthError::Validation(m) => ApiError::BadRequest(m),
            e if e.is_token_rejection() => {
                warn!(code = e.code(), error = %e, "token rejected");
                ApiError::Unauthorized(e.to_string())
            }
            other => ApiError::Internal(format!("auth error {}: {}", other.code(), other)),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
