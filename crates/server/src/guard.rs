//! Token guard for protected routes.
//!
//! The token is read from the `token` query parameter first, then from an
//! `Authorization: Bearer` header. Verified claims are stored in the request
//! extensions for handlers that need the caller's identity.
use axum::{
    extract::{Query, Request, State},
    http::{header, HeaderMap, Uri},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;
use tracing::warn;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Token carried by a request, if any. Empty values count as absent.
pub fn extract_token(uri: &Uri, headers: &HeaderMap) -> Option<String> {
    let from_query = Query::<TokenQuery>::try_from_uri(uri).ok().and_then(|Query(q)| q.token);
    let from_header = || {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(|t| t.trim().to_string())
    };
    from_query.filter(|t| !t.is_empty()).or_else(from_header).filter(|t| !t.is_empty())
}

pub async fn token_required(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = req.uri().path().to_string();
    let Some(token) = extract_token(req.uri(), req.headers()) else {
        warn!(path = %path, "request without token");
        return Err(ApiError::Forbidden("Token is missing".into()));
    };

    match state.auth.verify(&token) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        Err(e) => {
            warn!(path = %path, error = %e, "token validation failed");
            Err(ApiError::Forbidden("Token is invalid".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn query_token_wins_over_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
        let uri: Uri = "/api/users?token=from-query".parse().unwrap();
        assert_eq!(extract_token(&uri, &headers).as_deref(), Some("from-query"));

        let uri: Uri = "/api/users".parse().unwrap();
        assert_eq!(extract_token(&uri, &headers).as_deref(), Some("from-header"));
    }

    #[test]
    fn empty_or_malformed_tokens_are_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        let uri: Uri = "/api/users?token=".parse().unwrap();
        assert_eq!(extract_token(&uri, &headers), None);
    }
}
