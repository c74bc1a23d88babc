use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct GreetingResponse { pub name: String }

#[derive(utoipa::ToSchema)]
pub struct RegisterRequest { pub name: String, pub email: String, pub password: String }

#[derive(utoipa::ToSchema)]
pub struct LoginRequest { pub email: String, pub password: String }

#[derive(utoipa::ToSchema)]
pub struct TokenResponse { pub token: String }

#[derive(utoipa::ToSchema)]
pub struct RefreshRequest { pub token: String }

#[derive(utoipa::ToSchema)]
pub struct RefreshResponse { pub access_token: String }

#[derive(utoipa::ToSchema)]
pub struct LookupRowDoc { pub id: i32, pub label: String }

#[derive(utoipa::ToSchema)]
pub struct BusinessProfileRequest {
    pub name: String,
    pub country: String,
    pub phone_number: String,
    pub user_type_id: i32,
    pub business_type_id: i32,
    pub heard_about_by: String,
    pub email: String,
    pub password: String,
    pub website: Option<String>,
    pub business_size: String,
    pub country_code: String,
    pub office_phone_number: Option<String>,
    pub address_line_1: String,
    pub address_line_2: Option<String>,
    pub city: String,
    pub post_code: String,
    pub description: Option<String>,
    pub industry_type_id: i32,
}

#[derive(utoipa::ToSchema)]
pub struct ProjectRequest {
    pub status_id: i32,
    pub description: String,
    pub region: String,
    pub country: String,
    pub industry_type_id: i32,
    pub funded_by_equity: Option<bool>,
    /// Ignored unless `funded_by_equity` is true.
    pub equity_type_id: Option<i32>,
    pub funded_by_debt: Option<bool>,
    /// Ignored unless `funded_by_debt` is true.
    pub debt_type_id: Option<i32>,
    pub revenue: Option<i64>,
    pub ebitda: Option<i64>,
}

/// Body for deals and transactions.
#[derive(utoipa::ToSchema)]
pub struct NamedStatusRequest { pub name: String, pub status_id: i32 }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::hello,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::auth::logout,
        crate::routes::auth::refresh,
        crate::routes::users::list,
        crate::routes::users::get,
        crate::routes::lookups::list,
        crate::routes::business::list_profiles,
        crate::routes::business::create_profile,
        crate::routes::business::get_profile,
        crate::routes::business::list_projects,
        crate::routes::business::create_project,
        crate::routes::business::list_deals,
        crate::routes::business::create_deal,
        crate::routes::business::list_transactions,
        crate::routes::business::create_transaction,
    ),
    components(
        schemas(
            HealthResponse,
            GreetingResponse,
            RegisterRequest,
            LoginRequest,
            TokenResponse,
            RefreshRequest,
            RefreshResponse,
            LookupRowDoc,
            BusinessProfileRequest,
            ProjectRequest,
            NamedStatusRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "users"),
        (name = "lookups"),
        (name = "business")
    )
)]
pub struct ApiDoc;
