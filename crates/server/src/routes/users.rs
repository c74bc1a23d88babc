use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use service::user_service::{self, UserView};

use crate::errors::ApiError;
use crate::state::ServerState;

#[utoipa::path(get, path = "/api/users", tag = "users", params(("token" = Option<String>, Query, description = "Access token")), responses((status = 200, description = "All users"), (status = 403, description = "Token is missing or invalid")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<UserView>>, ApiError> {
    let users = user_service::list_users(&state.db).await?;
    debug!(count = users.len(), "list users");
    Ok(Json(users))
}

#[utoipa::path(get, path = "/api/users/{id}", tag = "users", params(("id" = i32, Path, description = "User id")), responses((status = 200, description = "User"), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<UserView>, ApiError> {
    Ok(Json(user_service::get_user(&state.db, id).await?))
}
