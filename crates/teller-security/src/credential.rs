//! Session credential signing and verification (HS256 JWT)

use std::sync::Arc;

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::key::SigningKey;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("No session credential presented")]
    Missing,
    #[error("Credential signature mismatch")]
    BadSignature,
    #[error("Credential expired at {0}")]
    Expired(i64),
    #[error("Malformed credential: {0}")]
    Malformed(String),
    #[error("Credential creation failed: {0}")]
    Signing(String),
    #[error("Expiry {0} cannot be represented as a cookie date")]
    InvalidExpiry(i64),
}

/// Claims carried by a session credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims<T> {
    pub user: T,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// A freshly signed token and the instant it stops being valid.
#[derive(Debug, Clone)]
pub struct IssuedCredential {
    pub token: String,
    pub expires_at: i64,
}

pub struct CredentialService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
    clock: Arc<dyn Clock>,
}

impl CredentialService {
    pub fn new(key: &SigningKey, ttl_seconds: i64) -> Self {
        Self::with_clock(key, ttl_seconds, Arc::new(SystemClock))
    }

    pub fn with_clock(key: &SigningKey, ttl_seconds: i64, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(key.as_bytes()),
            decoding_key: DecodingKey::from_secret(key.as_bytes()),
            ttl_seconds,
            clock,
        }
    }

    /// Signs `user` as-is; its shape is not inspected.
    pub fn sign<T: Serialize>(&self, user: &T) -> Result<IssuedCredential, CredentialError> {
        let iat = self.clock.now();
        let exp = iat + self.ttl_seconds;
        let claims = SessionClaims {
            user,
            iat,
            exp,
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| CredentialError::Signing(e.to_string()))?;
        debug!(jti = %claims.jti, exp, "Session credential signed");
        Ok(IssuedCredential { token, expires_at: exp })
    }

    /// Checks signature first, then expiry against the service clock with no leeway.
    pub fn verify<T: DeserializeOwned>(&self, token: &str) -> Result<SessionClaims<T>, CredentialError> {
        if token.is_empty() {
            return Err(CredentialError::Missing);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        let claims = decode::<SessionClaims<T>>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => CredentialError::BadSignature,
                _ => CredentialError::Malformed(e.to_string()),
            })?;

        if claims.exp <= self.clock.now() {
            return Err(CredentialError::Expired(claims.exp));
        }
        Ok(claims)
    }
}
