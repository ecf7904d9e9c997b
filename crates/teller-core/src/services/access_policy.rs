//! Route protection for the dashboard areas

use percent_encoding::percent_decode_str;

use crate::domain::dashboard::{is_under, DASHBOARD_ROOT};
use crate::domain::{DashboardArea, SessionUser};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    /// No usable session; send the visitor to log in.
    Login,
    Redirect(&'static str),
}

/// Path as the file server will resolve it: percent-decoded, with empty
/// and `.` segments dropped. Classify requests on this, never the raw URI.
pub fn request_path(raw: &str) -> String {
    let decoded = percent_decode_str(raw).decode_utf8_lossy();
    let segments: Vec<&str> = decoded
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();
    format!("/{}", segments.join("/"))
}

/// Whether `decide` can return anything but `Allow` for `path`.
pub fn is_guarded(path: &str, login_path: &str) -> bool {
    is_under(path, login_path) || is_under(path, DASHBOARD_ROOT)
}

/// Decides what to do with a request for `path` (see `request_path`).
/// `user` is the verified session user, if any.
pub fn decide(path: &str, user: Option<&SessionUser>, login_path: &str) -> AccessDecision {
    if is_under(path, login_path) {
        return match user {
            Some(u) => AccessDecision::Redirect(u.role.home()),
            None => AccessDecision::Allow,
        };
    }

    if !is_under(path, DASHBOARD_ROOT) {
        return AccessDecision::Allow;
    }

    let Some(user) = user else {
        return AccessDecision::Login;
    };

    match DashboardArea::from_path(path) {
        Some(area) if area.admits(user.role) => AccessDecision::Allow,
        // Wrong area, or the bare dashboard root.
        _ => AccessDecision::Redirect(user.role.home()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    const LOGIN: &str = "/login";

    fn user(role: Role) -> SessionUser {
        SessionUser::new("u-1", "Tono", "tono@bank.example", role)
    }

    #[test]
    fn test_request_path_decodes_and_collapses() {
        assert_eq!(request_path("/%64ashboard/admin/index.html"), "/dashboard/admin/index.html");
        assert_eq!(request_path("/dashboard%2Fadmin"), "/dashboard/admin");
        assert_eq!(request_path("//dashboard/./admin/"), "/dashboard/admin");
        assert_eq!(request_path("/"), "/");
        // Decoded once, like the file server.
        assert_eq!(request_path("/%2564ashboard"), "/%64ashboard");
    }

    #[test]
    fn test_encoded_dashboard_path_is_guarded() {
        let path = request_path("/%64ashboard/%61dmin");
        assert!(is_guarded(&path, LOGIN));
        assert_eq!(decide(&path, None, LOGIN), AccessDecision::Login);
        assert_eq!(
            decide(&path, Some(&user(Role::User)), LOGIN),
            AccessDecision::Redirect("/dashboard/user")
        );
    }

    #[test]
    fn test_only_login_and_dashboard_are_guarded() {
        assert!(is_guarded("/login", LOGIN));
        assert!(is_guarded("/dashboard/user/loans", LOGIN));
        assert!(!is_guarded("/retirement", LOGIN));
        assert!(!is_guarded("/api/session", LOGIN));
    }

    #[test]
    fn test_public_pages_always_allowed() {
        assert_eq!(decide("/", None, LOGIN), AccessDecision::Allow);
        assert_eq!(decide("/mortgages/calculator", None, LOGIN), AccessDecision::Allow);
        assert_eq!(decide("/dashboards-overview", None, LOGIN), AccessDecision::Allow);
    }

    #[test]
    fn test_dashboard_without_session_goes_to_login() {
        assert_eq!(decide("/dashboard/admin/users", None, LOGIN), AccessDecision::Login);
        assert_eq!(decide("/dashboard", None, LOGIN), AccessDecision::Login);
    }

    #[test]
    fn test_matching_role_is_allowed() {
        let admin = user(Role::Admin);
        let sysadmin = user(Role::SystemAdmin);
        assert_eq!(decide("/dashboard/admin", Some(&admin), LOGIN), AccessDecision::Allow);
        assert_eq!(decide("/dashboard/system-admin/keys", Some(&sysadmin), LOGIN), AccessDecision::Allow);
    }

    #[test]
    fn test_wrong_role_goes_home() {
        let customer = user(Role::User);
        assert_eq!(
            decide("/dashboard/admin", Some(&customer), LOGIN),
            AccessDecision::Redirect("/dashboard/user")
        );
        assert_eq!(
            decide("/dashboard", Some(&user(Role::SystemAdmin)), LOGIN),
            AccessDecision::Redirect("/dashboard/system-admin")
        );
    }

    #[test]
    fn test_login_page_with_session_goes_home() {
        assert_eq!(
            decide("/login", Some(&user(Role::Admin)), LOGIN),
            AccessDecision::Redirect("/dashboard/admin")
        );
        assert_eq!(decide("/login", None, LOGIN), AccessDecision::Allow);
    }
}
