//! HS256 access tokens.
//!
//! Every token carries `orig_iat`, the time the login that started the chain
//! happened. Refreshing keeps `orig_iat` and moves `iat`/`exp` forward, so a
//! chain of refreshes can never outlive the refresh lifespan.
use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::domain::AuthUser;
use super::errors::AuthError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
    pub orig_iat: i64,
}

impl Claims {
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub
            .parse()
            .map_err(|_| AuthError::TokenError(format!("bad subject {}", self.sub)))
    }
}

#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_lifespan: Duration,
    refresh_lifespan: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, access_lifespan: Duration, refresh_lifespan: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            access_lifespan,
            refresh_lifespan,
        }
    }

    /// Start a new chain for `user` at unix time `now`.
    pub fn issue_at(&self, user: &AuthUser, now: i64) -> Result<String, AuthError> {
        self.sign(&Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iat: now,
            exp: now + self.access_lifespan.num_seconds(),
            orig_iat: now,
        })
    }

    /// Signature and expiry check.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, AuthError> {
        let claims = self.decode_signed(token)?;
        if claims.exp <= now {
            return Err(AuthError::Expired);
        }
        Ok(claims)
    }

    /// Re-sign `old` with a fresh expiry. `old` may already be expired but its
    /// chain must still be inside the refresh lifespan.
    pub fn refresh_at(&self, old: &Claims, now: i64) -> Result<String, AuthError> {
        if now - old.orig_iat > self.refresh_lifespan.num_seconds() {
            return Err(AuthError::RefreshWindowClosed);
        }
        self.sign(&Claims {
            sub: old.sub.clone(),
            email: old.email.clone(),
            iat: now,
            exp: now + self.access_lifespan.num_seconds(),
            orig_iat: old.orig_iat,
        })
    }

    /// Verify the signature only; expiry is left to the caller.
    pub fn decode_signed(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }

    fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_700_000_000;
    const HOUR: i64 = 3600;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new("test-secret", Duration::hours(24), Duration::days(30))
    }

    fn ann() -> AuthUser {
        AuthUser { id: 7, email: "ann@example.com".into(), name: "Ann".into() }
    }

    #[test]
    fn token_is_valid_within_lifespan_only() {
        let iss = issuer();
        let token = iss.issue_at(&ann(), T0).unwrap();

        let claims = iss.verify_at(&token, T0 + HOUR).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.user_id().unwrap(), 7);
        assert_eq!(claims.exp, T0 + 24 * HOUR);

        assert!(matches!(iss.verify_at(&token, T0 + 24 * HOUR + 1), Err(AuthError::Expired)));
    }

    #[test]
    fn wrong_secret_or_garbage_is_rejected() {
        let token = issuer().issue_at(&ann(), T0).unwrap();
        let other = TokenIssuer::new("other", Duration::hours(24), Duration::days(30));
        assert!(matches!(other.verify_at(&token, T0), Err(AuthError::TokenError(_))));
        assert!(matches!(issuer().verify_at("not.a.jwt", T0), Err(AuthError::TokenError(_))));
    }

    #[test]
    fn refresh_extends_expiry_and_keeps_chain_start() {
        let iss = issuer();
        let token = iss.issue_at(&ann(), T0).unwrap();
        let old = iss.decode_signed(&token).unwrap();

        // Expired, but still inside the refresh window.
        let later = T0 + 48 * HOUR;
        let fresh = iss.refresh_at(&old, later).unwrap();
        let claims = iss.verify_at(&fresh, later + HOUR).unwrap();
        assert_eq!(claims.sub, old.sub);
        assert_eq!(claims.orig_iat, T0);
        assert_eq!(claims.iat, later);
        assert!(claims.exp > old.exp);
    }

    #[test]
    fn refresh_outside_window_fails() {
        let iss = issuer();
        let old = iss.decode_signed(&iss.issue_at(&ann(), T0).unwrap()).unwrap();
        let too_late = T0 + 30 * 24 * HOUR + 1;
        assert!(matches!(iss.refresh_at(&old, too_late), Err(AuthError::RefreshWindowClosed)));
    }
}
