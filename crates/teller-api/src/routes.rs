//! Router assembly

use axum::{middleware, routing::get, Router};
use tower_http::services::ServeDir;

use crate::handlers::{health, session};
use crate::middleware::route_guard;
use crate::state::AppState;

/// API and health routes, with everything else served from the static
/// front-end bundle behind the route guard.
pub fn build_router(state: AppState) -> Router {
    let frontend = Router::new()
        .fallback_service(ServeDir::new(&state.config.web.static_dir))
        .layer(middleware::from_fn_with_state(state.clone(), route_guard));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route(
            "/api/session",
            get(session::get_session)
                .post(session::create_session)
                .delete(session::delete_session),
        )
        .with_state(state)
        .merge(frontend)
}
