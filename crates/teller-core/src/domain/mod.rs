//! # Teller Core - Domain Module

pub mod user;
pub mod dashboard;

pub use user::{Role, SessionUser};
pub use dashboard::DashboardArea;
