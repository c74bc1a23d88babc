use anyhow::{Context, Result};
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8000, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

/// Token settings. Lifespans mirror the access/refresh split: an access token
/// is valid for `access_lifespan_hours`, and may be refreshed until
/// `refresh_lifespan_days` after it was first issued.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub jwt_secret: String,
    #[serde(default = "default_access_lifespan_hours")]
    pub access_lifespan_hours: i64,
    #[serde(default = "default_refresh_lifespan_days")]
    pub refresh_lifespan_days: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            access_lifespan_hours: default_access_lifespan_hours(),
            refresh_lifespan_days: default_refresh_lifespan_days(),
        }
    }
}

fn default_access_lifespan_hours() -> i64 { 24 }
fn default_refresh_lifespan_days() -> i64 { 30 }

/// One year.
pub const MAX_ACCESS_LIFESPAN_HOURS: i64 = 24 * 365;
/// Ten years.
pub const MAX_REFRESH_LIFESPAN_DAYS: i64 = 3650;

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

/// Like [`load_from_file`], but a missing file yields the defaults.
/// Unreadable or malformed files are still errors.
pub fn load_or_default(path: &str) -> Result<AppConfig> {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).with_context(|| format!("parse {path}")),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(e).with_context(|| format!("read {path}")),
    }
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`), fall back to defaults when the
    /// file is absent, then apply environment overrides and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_or_default(&config_path())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize_from_env();
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        self.auth.normalize_from_env();
        self.auth.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize_from_env(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            self.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            self.worker_threads = Some(w);
        }
    }

    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    /// `DATABASE_URL` fills the URL only when the TOML leaves it empty.
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://") || lower.starts_with("sqlite:")) {
            return Err(anyhow!("database.url must start with postgres://, postgresql:// or sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl AuthConfig {
    pub fn normalize_from_env(&mut self) {
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            self.jwt_secret = secret;
        }
        if let Some(h) = std::env::var("JWT_ACCESS_LIFESPAN_HOURS").ok().and_then(|v| v.parse().ok()) {
            self.access_lifespan_hours = h;
        }
        if let Some(d) = std::env::var("JWT_REFRESH_LIFESPAN_DAYS").ok().and_then(|v| v.parse().ok()) {
            self.refresh_lifespan_days = d;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.trim().is_empty() {
            return Err(anyhow!("auth.jwt_secret is empty; set it in config.toml or JWT_SECRET"));
        }
        if !(1..=MAX_ACCESS_LIFESPAN_HOURS).contains(&self.access_lifespan_hours) {
            return Err(anyhow!("auth.access_lifespan_hours must be within 1..={MAX_ACCESS_LIFESPAN_HOURS}"));
        }
        if !(1..=MAX_REFRESH_LIFESPAN_DAYS).contains(&self.refresh_lifespan_days) {
            return Err(anyhow!("auth.refresh_lifespan_days must be within 1..={MAX_REFRESH_LIFESPAN_DAYS}"));
        }
        let refresh_hours = self
            .refresh_lifespan_days
            .checked_mul(24)
            .ok_or_else(|| anyhow!("auth.refresh_lifespan_days is out of range"))?;
        if refresh_hours < self.access_lifespan_hours {
            return Err(anyhow!("auth.refresh_lifespan_days must cover at least one access lifespan"));
        }
        Ok(())
    }
}
