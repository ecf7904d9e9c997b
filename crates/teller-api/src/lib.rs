//! # Teller API
//! 
//! HTTP handlers, session extractor, route guard, and router.

pub mod handlers;
pub mod middleware;
pub mod extract;
pub mod error;
pub mod response;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
