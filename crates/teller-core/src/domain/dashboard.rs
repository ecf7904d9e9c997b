// ============================================================================
// Teller Core - Dashboard Areas
// File: crates/teller-core/src/domain/dashboard.rs
// Description: Protected dashboard sections of the front-end
// ============================================================================

use crate::domain::Role;

pub const DASHBOARD_ROOT: &str = "/dashboard";

/// Dashboard section, each reserved for exactly one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardArea {
    Admin,
    SystemAdmin,
    User,
}

impl DashboardArea {
    pub const ALL: [DashboardArea; 3] = [DashboardArea::Admin, DashboardArea::SystemAdmin, DashboardArea::User];

    pub fn path(&self) -> &'static str {
        match self {
            DashboardArea::Admin => "/dashboard/admin",
            DashboardArea::SystemAdmin => "/dashboard/system-admin",
            DashboardArea::User => "/dashboard/user",
        }
    }

    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => DashboardArea::Admin,
            Role::SystemAdmin => DashboardArea::SystemAdmin,
            Role::User => DashboardArea::User,
        }
    }

    pub fn required_role(&self) -> Role {
        match self {
            DashboardArea::Admin => Role::Admin,
            DashboardArea::SystemAdmin => Role::SystemAdmin,
            DashboardArea::User => Role::User,
        }
    }

    /// Area owning `path`, matched on whole segments.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|area| is_under(path, area.path()))
    }

    pub fn admits(&self, role: Role) -> bool {
        self.required_role() == role
    }
}

/// True for `prefix` itself and anything below it.
pub fn is_under(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
