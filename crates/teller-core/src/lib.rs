//! # Teller Core
//! 
//! Session user, roles, dashboard areas, and the session and access services.

pub mod domain;
pub mod services;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
