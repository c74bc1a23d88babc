pub mod auth;
pub mod business;
pub mod lookups;
pub mod users;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::{Greeting, Health};

use crate::guard;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[utoipa::path(get, path = "/api", tag = "health", responses((status = 200, description = "Greeting", body = crate::openapi::GreetingResponse)))]
pub async fn hello() -> Json<Greeting> {
    Json(Greeting::hello_world())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: public routes plus the token-guarded API.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api", get(hello))
        .route("/api/login", post(auth::login))
        .route("/api/register", post(auth::register))
        .route("/api/logout", get(auth::logout))
        .route("/api/refresh", post(auth::refresh))
        .route("/api/lookups/:kind", get(lookups::list))
        .route("/api-docs/openapi.json", get(openapi_json));

    let guarded = Router::new()
        .route("/api/users", get(users::list))
        .route("/api/users/:id", get(users::get))
        .route("/api/business-profiles", get(business::list_profiles).post(business::create_profile))
        .route("/api/business-profiles/:id", get(business::get_profile))
        .route(
            "/api/business-profiles/:id/projects",
            get(business::list_projects).post(business::create_project),
        )
        .route(
            "/api/business-profiles/:id/deals",
            get(business::list_deals).post(business::create_deal),
        )
        .route(
            "/api/business-profiles/:id/transactions",
            get(business::list_transactions).post(business::create_transaction),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), guard::token_required));

    public
        .merge(guarded)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
