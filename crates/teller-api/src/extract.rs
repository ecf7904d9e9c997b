//! Authenticated-session extractor

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderMap},
};
use serde_json::Value;
use teller_core::services::SessionService;

use crate::error::ApiError;

/// The verified user payload behind the request's session cookie, as signed.
/// Rejects with the generic 401 when there is none.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Value);

impl<S> FromRequestParts<S> for CurrentSession
where
    Arc<SessionService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let sessions = Arc::<SessionService>::from_ref(state);
        let user = sessions.current(cookie_headers(&parts.headers))?;
        Ok(CurrentSession(user))
    }
}

/// `Cookie` header values that are valid visible ASCII.
pub fn cookie_headers(headers: &HeaderMap) -> impl Iterator<Item = &str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
}
