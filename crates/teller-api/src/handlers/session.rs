// ============================================================================
// Teller API - Session Handlers
// File: crates/teller-api/src/handlers/session.rs
// ============================================================================
//! Session cookie endpoints (issue, read, clear)

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderName, HeaderValue},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use teller_core::services::SessionService;
use teller_security::Cookie;

use crate::error::ApiError;
use crate::extract::CurrentSession;
use crate::response::ApiResponse;

/// Body of POST /api/session. `user` is signed as posted.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub user: Value,
}

/// Payload returned by GET /api/session
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub user: Value,
}

/// Create session handler - POST /api/session
pub async fn create_session(
    State(sessions): State<Arc<SessionService>>,
    payload: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::InvalidBody(e.status(), e.body_text()))?;

    let cookie = sessions.start(&payload.user)?;

    Ok((
        [set_cookie(&cookie)?],
        Json(ApiResponse::confirmation("Session created")),
    ))
}

/// Read session handler - GET /api/session
pub async fn get_session(CurrentSession(user): CurrentSession) -> Json<ApiResponse<SessionView>> {
    Json(ApiResponse::success(SessionView { user }))
}

/// Clear session handler - DELETE /api/session
pub async fn delete_session(
    State(sessions): State<Arc<SessionService>>,
) -> Result<impl IntoResponse, ApiError> {
    let cookie = sessions.end();
    Ok((
        [set_cookie(&cookie)?],
        Json(ApiResponse::confirmation("Session cleared")),
    ))
}

fn set_cookie(cookie: &Cookie<'_>) -> Result<(HeaderName, HeaderValue), ApiError> {
    let value = HeaderValue::from_str(&cookie.to_string())
        .map_err(|e| ApiError::Internal(format!("unencodable session cookie: {}", e)))?;
    Ok((header::SET_COOKIE, value))
}
