//! Configuration management

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_LOGIN_PATH, DEFAULT_SESSION_TTL, DEFAULT_STATIC_DIR, ENV_DEVELOPMENT, ENV_PRODUCTION,
    SESSION_COOKIE_NAME, SESSION_SECRET_ENV,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub session: SessionSettings,
    pub web: WebSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    #[serde(default)]
    pub secret_key: Option<String>,
    pub cookie_name: String,
    pub ttl_seconds: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WebSettings {
    pub static_dir: String,
    pub login_path: String,
    #[serde(default)]
    pub allowed_origin: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| ENV_DEVELOPMENT.into());
        let secret = std::env::var(SESSION_SECRET_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty());

        let config = Config::builder()
            .set_default("app.env", env.as_str())?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "teller-server")?
            .set_default("session.cookie_name", SESSION_COOKIE_NAME)?
            .set_default("session.ttl_seconds", DEFAULT_SESSION_TTL)?
            .set_default("web.static_dir", DEFAULT_STATIC_DIR)?
            .set_default("web.login_path", DEFAULT_LOGIN_PATH)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .set_override_option("session.secret_key", secret)?
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.session.ttl_seconds <= 0 {
            return Err(AppError::InvalidSetting {
                key: "session.ttl_seconds",
                reason: format!("must be positive, got {}", self.session.ttl_seconds),
            });
        }
        if self.session.cookie_name.trim().is_empty() {
            return Err(AppError::InvalidSetting {
                key: "session.cookie_name",
                reason: "must not be empty".to_string(),
            });
        }
        if !self.web.login_path.starts_with('/') {
            return Err(AppError::InvalidSetting {
                key: "web.login_path",
                reason: format!("must start with '/', got {}", self.web.login_path),
            });
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.app.env.eq_ignore_ascii_case(ENV_PRODUCTION)
    }
}
