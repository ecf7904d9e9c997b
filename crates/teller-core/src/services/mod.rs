//! Domain services (business logic)

pub mod session_service;
pub mod access_policy;

pub use session_service::SessionService;
pub use access_policy::{decide, is_guarded, request_path, AccessDecision};
