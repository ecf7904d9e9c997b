//! Application-wide constants

pub const SESSION_COOKIE_NAME: &str = "session";
pub const SESSION_SECRET_ENV: &str = "SESSION_SECRET_KEY";
/// Seven days.
pub const DEFAULT_SESSION_TTL: i64 = 604800;
/// Used only when `SESSION_SECRET_KEY` is unset.
pub const DEV_FALLBACK_SECRET: &str = "teller-development-session-secret-do-not-use";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const ENV_PRODUCTION: &str = "production";
pub const ENV_DEVELOPMENT: &str = "development";
