use std::net::SocketAddr;

use axum::Router;
use chrono::Duration;
use configs::{AppConfig, AuthConfig as AuthSettings, ServerConfig};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Token settings for the auth service from the `[auth]` config section.
pub fn auth_config(settings: &AuthSettings) -> Result<service::auth::AuthConfig, StartupError> {
    let access_lifespan = Duration::try_hours(settings.access_lifespan_hours).ok_or_else(|| {
        StartupError::InvalidConfig(format!("auth.access_lifespan_hours {} out of range", settings.access_lifespan_hours))
    })?;
    let refresh_lifespan = Duration::try_days(settings.refresh_lifespan_days).ok_or_else(|| {
        StartupError::InvalidConfig(format!("auth.refresh_lifespan_days {} out of range", settings.refresh_lifespan_days))
    })?;
    Ok(service::auth::AuthConfig { jwt_secret: settings.jwt_secret.clone(), access_lifespan, refresh_lifespan })
}

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}:{}: {e}", server.host, server.port)))
}

/// Router wired to a ready database; shared by `run` and the integration tests.
pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Public entry: connect, migrate, build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let auth = auth_config(&cfg.auth)?;
    let db = models::db::connect(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    models::db::migrate(&db).await?;
    info!("migrations applied");

    let state = ServerState::new(db, auth);
    let app = build_app(state);

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting server crate");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("bind {addr}: {e}")))?;
    axum::serve(listener, app).await.map_err(|e| StartupError::Any(e.into()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_config_converts_units() {
        let settings = AuthSettings { jwt_secret: "s".into(), access_lifespan_hours: 2, refresh_lifespan_days: 3 };
        let cfg = auth_config(&settings).unwrap();
        assert_eq!(cfg.access_lifespan.num_seconds(), 2 * 3600);
        assert_eq!(cfg.refresh_lifespan.num_seconds(), 3 * 86_400);
    }

    #[test]
    fn oversized_lifespans_are_config_errors() {
        let settings = AuthSettings { jwt_secret: "s".into(), access_lifespan_hours: i64::MAX, refresh_lifespan_days: 3 };
        assert!(matches!(auth_config(&settings), Err(StartupError::InvalidConfig(_))));
        let settings = AuthSettings { jwt_secret: "s".into(), access_lifespan_hours: 2, refresh_lifespan_days: i64::MAX };
        assert!(matches!(auth_config(&settings), Err(StartupError::InvalidConfig(_))));
    }

    #[test]
    fn bad_host_is_a_config_error() {
        let server = ServerConfig { host: "not a host".into(), port: 80, worker_threads: None };
        assert!(matches!(bind_addr(&server), Err(StartupError::InvalidConfig(_))));
    }
}
