use axum::{
    extract::{Path, State},
    Json,
};

use models::lookup::LookupRow;
use service::lookup_service;

use crate::errors::ApiError;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/lookups/{kind}", tag = "lookups",
    params(("kind" = String, Path, description = "user-types, business-types, industry-types, statuses, equity-types or debt-types")),
    responses(
        (status = 200, description = "Rows ordered by id", body = [crate::openapi::LookupRowDoc]),
        (status = 404, description = "Unknown lookup")
    )
)]
pub async fn list(State(state): State<ServerState>, Path(kind): Path<String>) -> Result<Json<Vec<LookupRow>>, ApiError> {
    Ok(Json(lookup_service::list_lookup(&state.db, &kind).await?))
}
