use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info, instrument, warn};

use super::domain::{AuthSession, AuthUser, LoginInput, RegisterInput};
use super::errors::AuthError;
use super::password::{hash_password, verify_password};
use super::repository::AuthRepository;
use super::token::{Claims, TokenIssuer};

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    /// How long an issued or refreshed token stays valid.
    pub access_lifespan: Duration,
    /// How long after the original login a token may still be refreshed.
    pub refresh_lifespan: Duration,
}

impl AuthConfig {
    /// 24 hour tokens refreshable for 30 days.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self { jwt_secret: secret.into(), access_lifespan: Duration::hours(24), refresh_lifespan: Duration::days(30) }
    }
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    tokens: TokenIssuer,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self {
        let tokens = TokenIssuer::new(&cfg.jwt_secret, cfg.access_lifespan, cfg.refresh_lifespan);
        Self { repo, tokens }
    }

    /// Register a new user with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthService, AuthConfig, repository::mock::MockAuthRepository};
    /// use service::auth::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig::with_secret("secret"));
    /// let input = RegisterInput { name: "Test".into(), email: "user@example.com".into(), password: "Secret123".into() };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.email, "user@example.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthUser, AuthError> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation("email and password are required".into()));
        }
        if let Some(existing) = self.repo.find_user_by_email(&input.email).await? {
            debug!("user exists: {}", existing.email);
            return Err(AuthError::Conflict);
        }

        let hash = hash_password(&input.password)?;
        // A concurrent registration that slipped past the check above still
        // hits the unique index and surfaces as Conflict.
        let user = self.repo.create_user(&input.name, &input.email, &hash).await?;
        info!(user_id = user.id, email = %user.email, "user_registered");
        Ok(user)
    }

    /// Authenticate a user and issue a token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthService, AuthConfig, repository::mock::MockAuthRepository};
    /// use service::auth::domain::{RegisterInput, LoginInput};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo.clone(), AuthConfig::with_secret("secret"));
    /// let _ = tokio_test::block_on(svc.register(RegisterInput { name: "N".into(), email: "u@e.com".into(), password: "Passw0rd".into() }));
    /// let session = tokio_test::block_on(svc.login(LoginInput { email: "u@e.com".into(), password: "Passw0rd".into() })).unwrap();
    /// assert_eq!(session.user.email, "u@e.com");
    /// assert!(!session.token.is_empty());
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let Some(user) = self.repo.find_user_by_email(&input.email).await? else {
            warn!("login_failed: unknown email");
            return Err(AuthError::Unauthorized);
        };

        let cred = self.repo
            .get_credentials(user.id)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        if !verify_password(&input.password, &cred.password_hash)? {
            warn!(user_id = user.id, "login_failed: bad password");
            return Err(AuthError::Unauthorized);
        }

        let token = self.tokens.issue_at(&user, Utc::now().timestamp())?;
        info!(user_id = user.id, "login_succeeded");
        Ok(AuthSession { user, token })
    }

    /// Tokens are stateless, so there is nothing to revoke. The caller is
    /// identified in the log when it presents a valid token.
    pub fn logout(&self, token: Option<&str>) -> Option<i32> {
        let user_id = token
            .and_then(|t| self.verify(t).ok())
            .and_then(|c| c.user_id().ok());
        match user_id {
            Some(id) => info!(user_id = id, "user_logged_out"),
            None => debug!("anonymous logout"),
        }
        user_id
    }

    /// Signature and expiry check against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.tokens.verify_at(token, Utc::now().timestamp())
    }

    /// Exchange a token (possibly expired) for a fresh one.
    pub async fn refresh(&self, token: &str) -> Result<String, AuthError> {
        self.refresh_at(token, Utc::now().timestamp()).await
    }

    /// [`AuthService::refresh`] evaluated at unix time `now`.
    #[instrument(skip(self, token))]
    pub async fn refresh_at(&self, token: &str, now: i64) -> Result<String, AuthError> {
        let old = self.tokens.decode_signed(token)?;
        let user_id = old.user_id()?;
        if self.repo.find_user_by_id(user_id).await?.is_none() {
            warn!(user_id, "refresh_failed: user gone");
            return Err(AuthError::NotFound);
        }
        let fresh = self.tokens.refresh_at(&old, now)?;
        debug!(user_id, "token_refreshed");
        Ok(fresh)
    }

    /// Issue a token for `user` as if it logged in at `now`.
    pub fn issue_at(&self, user: &AuthUser, now: i64) -> Result<String, AuthError> {
        self.tokens.issue_at(user, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repository::mock::MockAuthRepository;

    fn svc() -> (Arc<MockAuthRepository>, AuthService<MockAuthRepository>) {
        let repo = Arc::new(MockAuthRepository::default());
        (repo.clone(), AuthService::new(repo, AuthConfig::with_secret("test-secret")))
    }

    fn register_input(email: &str) -> RegisterInput {
        RegisterInput { name: "Ann".into(), email: email.into(), password: "Secret123".into() }
    }

    #[tokio::test]
    async fn register_stores_a_hash_not_the_password() {
        let (repo, svc) = svc();
        svc.register(register_input("ann@example.com")).await.unwrap();
        let stored = repo.stored_hash("ann@example.com").unwrap();
        assert_ne!(stored, "Secret123");
        assert!(stored.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn second_registration_with_same_email_conflicts() {
        let (_, svc) = svc();
        svc.register(register_input("ann@example.com")).await.unwrap();
        let err = svc.register(register_input("ann@example.com")).await.unwrap_err();
        assert!(matches!(err, AuthError::Conflict));
        assert_eq!(err.code(), 1002);
    }

    #[tokio::test]
    async fn login_rejects_wrong_password_and_unknown_email() {
        let (_, svc) = svc();
        svc.register(register_input("ann@example.com")).await.unwrap();

        let ok = svc
            .login(LoginInput { email: "ann@example.com".into(), password: "Secret123".into() })
            .await
            .unwrap();
        let claims = svc.verify(&ok.token).unwrap();
        assert_eq!(claims.user_id().unwrap(), ok.user.id);

        let bad = svc.login(LoginInput { email: "ann@example.com".into(), password: "nope".into() }).await;
        assert!(matches!(bad, Err(AuthError::Unauthorized)));
        let unknown = svc.login(LoginInput { email: "bob@example.com".into(), password: "Secret123".into() }).await;
        assert!(matches!(unknown, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn refresh_requires_existing_user_and_open_window() {
        let (repo, svc) = svc();
        let user = svc.register(register_input("ann@example.com")).await.unwrap();
        let t0 = 1_700_000_000;
        let token = svc.issue_at(&user, t0).unwrap();

        let fresh = svc.refresh_at(&token, t0 + 3600).await.unwrap();
        assert_ne!(fresh, token);

        let late = svc.refresh_at(&token, t0 + Duration::days(31).num_seconds()).await;
        assert!(matches!(late, Err(AuthError::RefreshWindowClosed)));

        repo.remove("ann@example.com");
        assert!(matches!(svc.refresh_at(&token, t0 + 3600).await, Err(AuthError::NotFound)));
        assert!(matches!(svc.refresh_at("garbage", t0).await, Err(AuthError::TokenError(_))));
    }

    #[tokio::test]
    async fn logout_identifies_valid_tokens_only() {
        let (_, svc) = svc();
        svc.register(register_input("ann@example.com")).await.unwrap();
        let session = svc
            .login(LoginInput { email: "ann@example.com".into(), password: "Secret123".into() })
            .await
            .unwrap();
        assert_eq!(svc.logout(Some(&session.token)), Some(session.user.id));
        assert_eq!(svc.logout(Some("garbage")), None);
        assert_eq!(svc.logout(None), None);
    }
}
