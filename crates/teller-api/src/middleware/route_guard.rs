//! Role-based protection of the front-end dashboard pages

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use teller_core::services::{decide, is_guarded, request_path, AccessDecision};
use tracing::debug;

use crate::extract::cookie_headers;
use crate::state::AppState;

/// Characters escaped in the `next` query value; `/` stays readable.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Redirects requests for dashboard pages that the session does not admit.
/// Forged or expired cookies are treated as no session. Paths are
/// classified after percent-decoding, as the file server sees them.
pub async fn route_guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let login_path = state.config.web.login_path.as_str();
    let path = request_path(request.uri().path());
    if !is_guarded(&path, login_path) {
        return next.run(request).await;
    }

    let user = state.sessions.current_user(cookie_headers(request.headers())).ok();

    match decide(&path, user.as_ref(), login_path) {
        AccessDecision::Allow => next.run(request).await,
        AccessDecision::Login => {
            let target = request
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str())
                .unwrap_or("/");
            debug!(path = %path, "No session for protected page, redirecting to login");
            Redirect::temporary(&login_location(login_path, target)).into_response()
        }
        AccessDecision::Redirect(home) => {
            debug!(path = %path, home, "Redirecting to the session's own dashboard");
            Redirect::temporary(home).into_response()
        }
    }
}

/// `{login_path}?next={target}` with `target` escaped for a query value.
pub fn login_location(login_path: &str, target: &str) -> String {
    format!("{}?next={}", login_path, utf8_percent_encode(target, QUERY_VALUE))
}
