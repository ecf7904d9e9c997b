use std::sync::Arc;

use axum::extract::FromRef;
use teller_core::services::SessionService;
use teller_security::{CookieStore, CredentialService, SigningKey};
use teller_shared::config::AppConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(sessions: SessionService, config: AppConfig) -> Self {
        Self {
            sessions: Arc::new(sessions),
            config: Arc::new(config),
        }
    }

    /// Resolves the signing key and cookie attributes from `config`.
    pub fn from_config(config: AppConfig) -> Self {
        let production = config.is_production();
        let key = SigningKey::resolve(config.session.secret_key.as_deref(), production);
        let credentials = CredentialService::new(&key, config.session.ttl_seconds);
        let cookies = CookieStore::new(config.session.cookie_name.clone(), production);
        Self::new(SessionService::new(credentials, cookies), config)
    }
}

impl FromRef<AppState> for Arc<SessionService> {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
