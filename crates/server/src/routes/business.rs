use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use models::business_profile::{self, NewBusinessProfile, ProfileWithChildren};
use models::deal::{self, NewDeal};
use models::project::{self, NewProject};
use models::transaction::{self, NewTransaction};
use service::business_service;
use service::pagination::Pagination;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    /// Substring of the profile name.
    pub name: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[utoipa::path(
    get, path = "/api/business-profiles", tag = "business",
    params(ListQuery),
    responses((status = 200, description = "List OK"), (status = 403, description = "Token is missing or invalid"))
)]
pub async fn list_profiles(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<business_profile::Model>>, ApiError> {
    let page = Pagination::from_query(q.page, q.per_page);
    let list = business_service::list_profiles(&state.db, q.name.as_deref(), page).await?;
    info!(count = list.len(), "list business profiles");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/api/business-profiles", tag = "business",
    request_body = crate::openapi::BusinessProfileRequest,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Unknown lookup id"),
        (status = 409, description = "Name or email taken")
    )
)]
pub async fn create_profile(
    State(state): State<ServerState>,
    Json(input): Json<NewBusinessProfile>,
) -> Result<(StatusCode, Json<business_profile::Model>), ApiError> {
    let created = business_service::create_profile(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/business-profiles/{id}", tag = "business",
    params(("id" = i32, Path, description = "Business profile id")),
    responses((status = 200, description = "Profile with projects, deals and transactions"), (status = 404, description = "Not found"))
)]
pub async fn get_profile(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<ProfileWithChildren>, ApiError> {
    Ok(Json(business_service::get_profile(&state.db, id).await?))
}

#[utoipa::path(
    get, path = "/api/business-profiles/{id}/projects", tag = "business",
    params(("id" = i32, Path, description = "Business profile id")),
    responses((status = 200, description = "Projects"), (status = 404, description = "Not found"))
)]
pub async fn list_projects(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<project::Model>>, ApiError> {
    Ok(Json(business_service::list_projects(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/api/business-profiles/{id}/projects", tag = "business",
    params(("id" = i32, Path, description = "Business profile id")),
    request_body = crate::openapi::ProjectRequest,
    responses((status = 201, description = "Created"), (status = 400, description = "Unknown lookup id"), (status = 404, description = "Not found"))
)]
pub async fn create_project(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<NewProject>,
) -> Result<(StatusCode, Json<project::Model>), ApiError> {
    let created = business_service::create_project(&state.db, id, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/business-profiles/{id}/deals", tag = "business",
    params(("id" = i32, Path, description = "Business profile id")),
    responses((status = 200, description = "Deals"), (status = 404, description = "Not found"))
)]
pub async fn list_deals(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<deal::Model>>, ApiError> {
    Ok(Json(business_service::list_deals(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/api/business-profiles/{id}/deals", tag = "business",
    params(("id" = i32, Path, description = "Business profile id")),
    request_body = crate::openapi::NamedStatusRequest,
    responses((status = 201, description = "Created"), (status = 400, description = "Unknown status"), (status = 404, description = "Not found"))
)]
pub async fn create_deal(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<NewDeal>,
) -> Result<(StatusCode, Json<deal::Model>), ApiError> {
    let created = business_service::create_deal(&state.db, id, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/business-profiles/{id}/transactions", tag = "business",
    params(("id" = i32, Path, description = "Business profile id")),
    responses((status = 200, description = "Transactions"), (status = 404, description = "Not found"))
)]
pub async fn list_transactions(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<transaction::Model>>, ApiError> {
    Ok(Json(business_service::list_transactions(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/api/business-profiles/{id}/transactions", tag = "business",
    params(("id" = i32, Path, description = "Business profile id")),
    request_body = crate::openapi::NamedStatusRequest,
    responses((status = 201, description = "Created"), (status = 400, description = "Unknown status"), (status = 404, description = "Not found"))
)]
pub async fn create_transaction(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<NewTransaction>,
) -> Result<(StatusCode, Json<transaction::Model>), ApiError> {
    let created = business_service::create_transaction(&state.db, id, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
