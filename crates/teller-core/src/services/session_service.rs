// ============================================================================
// Teller Core - Session Service
// File: crates/teller-core/src/services/session_service.rs
// ============================================================================
//! Starting, reading and ending a cookie-held session

use serde_json::Value;
use teller_security::{Cookie, CookieStore, CredentialService};
use teller_shared::utils::mask_email;
use tracing::{debug, info};

use crate::domain::SessionUser;
use crate::error::DomainError;

/// Ties the credential signer/verifier to the session cookie.
pub struct SessionService {
    credentials: CredentialService,
    cookies: CookieStore,
}

impl SessionService {
    pub fn new(credentials: CredentialService, cookies: CookieStore) -> Self {
        Self { credentials, cookies }
    }

    /// Signs `user` exactly as given and returns the cookie to attach to the response.
    pub fn start(&self, user: &Value) -> Result<Cookie<'static>, DomainError> {
        let issued = self.credentials.sign(user)?;
        let cookie = self.cookies.issue(&issued)?;

        let user_id = match user.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        let email = user
            .get("email")
            .and_then(Value::as_str)
            .map(mask_email)
            .unwrap_or_default();
        info!(
            user_id = %user_id,
            email = %email,
            expires_at = issued.expires_at,
            "Session started"
        );
        Ok(cookie)
    }

    /// Signed user payload of the session found in the request's `Cookie`
    /// header values, unchanged.
    pub fn current<'a, I>(&self, cookie_headers: I) -> Result<Value, DomainError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let token = self.cookies.read(cookie_headers).ok_or_else(|| {
            debug!("Session rejected: no session cookie");
            DomainError::InvalidSession
        })?;

        self.credentials
            .verify::<Value>(&token)
            .map(|claims| claims.user)
            .map_err(|e| {
                debug!(reason = %e, "Session rejected");
                DomainError::from(e)
            })
    }

    /// Like `current`, read as a `SessionUser`. A payload without a usable
    /// role counts as no session.
    pub fn current_user<'a, I>(&self, cookie_headers: I) -> Result<SessionUser, DomainError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let payload = self.current(cookie_headers)?;
        serde_json::from_value(payload).map_err(|e| {
            debug!(reason = %e, "Session payload has no usable user");
            DomainError::InvalidSession
        })
    }

    /// Cookie that removes the session from the browser.
    pub fn end(&self) -> Cookie<'static> {
        info!("Session cleared");
        self.cookies.clear()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use teller_security::{FixedClock, SigningKey};

    use super::*;
    use crate::domain::Role;

    const NOW: i64 = 1_700_000_000;
    const WEEK: i64 = 604_800;

    fn service(now: i64, secret: &str) -> SessionService {
        let credentials =
            CredentialService::with_clock(&SigningKey::from_secret(secret), WEEK, Arc::new(FixedClock(now)));
        SessionService::new(credentials, CookieStore::new("session", false))
    }

    fn user() -> Value {
        json!({ "id": "u-1", "name": "Sari", "email": "sari@bank.example", "role": "admin" })
    }

    fn as_request_header(cookie: &Cookie<'_>) -> String {
        format!("{}={}", cookie.name(), cookie.value())
    }

    #[test]
    fn test_start_then_current_round_trips_user() {
        let svc = service(NOW, "k");
        let cookie = svc.start(&user()).unwrap();
        let header = as_request_header(&cookie);
        assert_eq!(svc.current([header.as_str()]).unwrap(), user());
        assert_eq!(
            svc.current_user([header.as_str()]).unwrap(),
            SessionUser::new("u-1", "Sari", "sari@bank.example", Role::Admin)
        );
    }

    #[test]
    fn test_payload_is_returned_unchanged() {
        let svc = service(NOW, "k");
        let payload = json!({ "id": 42, "name": "Rudi", "branch": "Jakarta", "tags": ["vip"] });
        let header = as_request_header(&svc.start(&payload).unwrap());

        assert_eq!(svc.current([header.as_str()]).unwrap(), payload);
        assert_eq!(svc.current_user([header.as_str()]).unwrap().id, "42");
    }

    #[test]
    fn test_payload_without_usable_role_has_no_user() {
        let svc = service(NOW, "k");
        let header = as_request_header(&svc.start(&json!("just a string")).unwrap());
        assert!(svc.current([header.as_str()]).is_ok());
        assert!(matches!(svc.current_user([header.as_str()]), Err(DomainError::InvalidSession)));
    }

    #[test]
    fn test_cookie_expiry_mirrors_token_expiry() {
        let cookie = service(NOW, "k").start(&user()).unwrap();
        assert_eq!(
            cookie.expires_datetime().map(|t| t.unix_timestamp()),
            Some(NOW + WEEK)
        );
    }

    #[test]
    fn test_all_failures_collapse_to_invalid_session() {
        let cookie = service(NOW, "k").start(&user()).unwrap();
        let header = as_request_header(&cookie);

        let expired = service(NOW + WEEK + 60, "k").current([header.as_str()]);
        let wrong_key = service(NOW, "other").current([header.as_str()]);
        let missing = service(NOW, "k").current(std::iter::empty());
        let garbage = service(NOW, "k").current(["session=garbage"]);

        for result in [expired, wrong_key, missing, garbage] {
            assert!(matches!(result, Err(DomainError::InvalidSession)));
        }
    }

    #[test]
    fn test_end_then_current_yields_no_session() {
        let svc = service(NOW, "k");
        let cleared = svc.end();
        let header = as_request_header(&cleared);
        assert!(matches!(svc.current([header.as_str()]), Err(DomainError::InvalidSession)));
    }
}
