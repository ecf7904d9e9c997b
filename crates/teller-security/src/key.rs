//! Signing key resolution

use sha2::{Digest, Sha256};
use tracing::{info, warn};

use teller_shared::constants::{DEV_FALLBACK_SECRET, SESSION_SECRET_ENV};

/// Symmetric key used to sign and verify session credentials.
#[derive(Clone)]
pub struct SigningKey {
    secret: Vec<u8>,
    fallback: bool,
}

impl SigningKey {
    pub fn from_secret(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
            fallback: false,
        }
    }

    /// Uses the configured secret, or the development key when none is set.
    /// A missing secret in production is logged, not rejected.
    pub fn resolve(configured: Option<&str>, production: bool) -> Self {
        match configured.filter(|s| !s.trim().is_empty()) {
            Some(secret) => {
                let key = Self::from_secret(secret);
                info!(fingerprint = %key.fingerprint(), "Session signing key loaded");
                key
            }
            None => {
                if production {
                    warn!(
                        env_var = SESSION_SECRET_ENV,
                        "Session secret is not set in production; falling back to the development key"
                    );
                }
                Self {
                    secret: DEV_FALLBACK_SECRET.as_bytes().to_vec(),
                    fallback: true,
                }
            }
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.secret
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// First 12 hex chars of the SHA-256 of the secret. Safe to log.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(&self.secret);
        hex::encode(digest)[..12].to_string()
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("fingerprint", &self.fingerprint())
            .field("fallback", &self.fallback)
            .finish()
    }
}
