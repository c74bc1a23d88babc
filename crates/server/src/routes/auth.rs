use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    Json,
};
use serde::{Deserialize, Serialize};

use service::auth::domain::{LoginInput, RegisterInput};

use crate::errors::ApiError;
use crate::guard::extract_token;
use crate::state::ServerState;

#[derive(Serialize)]
pub struct LoginOutput {
    pub token: String,
}

#[derive(Serialize)]
pub struct RefreshOutput {
    pub access_token: String,
}

#[derive(Deserialize)]
struct RefreshInput {
    token: String,
}

#[utoipa::path(post, path = "/api/register", tag = "auth", request_body = crate::openapi::RegisterRequest, responses((status = 201, description = "Registered"), (status = 400, description = "Bad Request"), (status = 409, description = "Conflict")))]
pub async fn register(
    State(state): State<ServerState>,
    Json(input): Json<RegisterInput>,
) -> Result<(StatusCode, &'static str), ApiError> {
    state.auth.register(input).await?;
    Ok((StatusCode::CREATED, "Registered"))
}

#[utoipa::path(post, path = "/api/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged In", body = crate::openapi::TokenResponse), (status = 401, description = "Login unsuccessful")))]
pub async fn login(
    State(state): State<ServerState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<LoginOutput>, ApiError> {
    let session = state.auth.login(input).await?;
    Ok(Json(LoginOutput { token: session.token }))
}

#[utoipa::path(get, path = "/api/logout", tag = "auth", responses((status = 200, description = "Logged out")))]
pub async fn logout(State(state): State<ServerState>, uri: Uri, headers: HeaderMap) -> &'static str {
    state.auth.logout(extract_token(&uri, &headers).as_deref());
    "Logged out"
}

/// Accepts the previous token either as the raw body or as `{"token": ...}`.
fn refresh_token_from_body(body: &str) -> Option<String> {
    let body = body.trim();
    let token = if body.starts_with('{') {
        serde_json::from_str::<RefreshInput>(body).ok()?.token
    } else {
        body.trim_matches('"').to_string()
    };
    Some(token).filter(|t| !t.is_empty())
}

#[utoipa::path(post, path = "/api/refresh", tag = "auth", request_body = crate::openapi::RefreshRequest, responses((status = 200, description = "Refreshed", body = crate::openapi::RefreshResponse), (status = 401, description = "Unauthorized")))]
pub async fn refresh(State(state): State<ServerState>, body: String) -> Result<Json<RefreshOutput>, ApiError> {
    let token = refresh_token_from_body(&body).ok_or_else(|| ApiError::Unauthorized("token required".into()))?;
    let access_token = state.auth.refresh(&token).await?;
    Ok(Json(RefreshOutput { access_token }))
}
