//! Session cookie adapter

use cookie::{Cookie, SameSite};
use time::OffsetDateTime;

use crate::credential::{CredentialError, IssuedCredential};

/// Writes, reads and clears the session cookie. Attributes are fixed:
/// HttpOnly, SameSite=Lax, Path=/, and Secure when serving production.
#[derive(Debug, Clone)]
pub struct CookieStore {
    name: String,
    secure: bool,
}

impl CookieStore {
    pub fn new(name: impl Into<String>, secure: bool) -> Self {
        Self {
            name: name.into(),
            secure,
        }
    }

    /// Cookie carrying `credential`, expiring with it.
    pub fn issue(&self, credential: &IssuedCredential) -> Result<Cookie<'static>, CredentialError> {
        let expires = OffsetDateTime::from_unix_timestamp(credential.expires_at)
            .map_err(|_| CredentialError::InvalidExpiry(credential.expires_at))?;
        Ok(self.build(credential.token.clone(), expires))
    }

    /// Empty value with an epoch expiry; browsers drop it on receipt.
    pub fn clear(&self) -> Cookie<'static> {
        self.build(String::new(), OffsetDateTime::UNIX_EPOCH)
    }

    /// Finds the session token among `Cookie` request header values.
    /// An empty value counts as absent.
    pub fn read<'a, I>(&self, cookie_headers: I) -> Option<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        cookie_headers
            .into_iter()
            .flat_map(Cookie::split_parse)
            .filter_map(Result::ok)
            .find(|c| c.name() == self.name)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())
    }

    fn build(&self, value: String, expires: OffsetDateTime) -> Cookie<'static> {
        Cookie::build((self.name.clone(), value))
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .path("/")
            .expires(expires)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(expires_at: i64) -> IssuedCredential {
        IssuedCredential {
            token: "header.payload.sig".to_string(),
            expires_at,
        }
    }

    #[test]
    fn test_issued_cookie_attributes() {
        let store = CookieStore::new("session", false);
        let cookie = store.issue(&credential(1_700_604_800)).unwrap();

        assert_eq!(cookie.name(), "session");
        assert_eq!(cookie.value(), "header.payload.sig");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_ne!(cookie.secure(), Some(true));
        assert_eq!(
            cookie.expires_datetime().map(|t| t.unix_timestamp()),
            Some(1_700_604_800)
        );
    }

    #[test]
    fn test_secure_flag_in_production() {
        let store = CookieStore::new("session", true);
        let cookie = store.issue(&credential(1_700_604_800)).unwrap();
        assert_eq!(cookie.secure(), Some(true));
        assert!(cookie.to_string().contains("Secure"));
    }

    #[test]
    fn test_clear_writes_empty_value_with_epoch_expiry() {
        let store = CookieStore::new("session", false);
        let cookie = store.clear();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.expires_datetime(), Some(OffsetDateTime::UNIX_EPOCH));
        assert_eq!(cookie.path(), Some("/"));
        assert!(cookie.to_string().contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
    }

    #[test]
    fn test_read_picks_named_cookie() {
        let store = CookieStore::new("session", false);
        assert_eq!(
            store.read(["theme=dark; session=abc.def.ghi; lang=id"]),
            Some("abc.def.ghi".to_string())
        );
        assert_eq!(
            store.read(["theme=dark", "session=tok"]),
            Some("tok".to_string())
        );
        assert_eq!(store.read(["theme=dark"]), None);
        assert_eq!(store.read(std::iter::empty()), None);
    }

    #[test]
    fn test_read_after_clear_yields_nothing() {
        let store = CookieStore::new("session", false);
        let cleared = store.clear();
        let echoed = format!("{}={}", cleared.name(), cleared.value());
        assert_eq!(store.read([echoed.as_str()]), None);
    }

    #[test]
    fn test_unrepresentable_expiry_is_an_error() {
        let store = CookieStore::new("session", false);
        assert!(matches!(
            store.issue(&credential(i64::MAX)),
            Err(CredentialError::InvalidExpiry(_))
        ));
    }
}
