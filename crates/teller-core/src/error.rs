//! Domain errors

use teller_security::CredentialError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Covers missing, malformed, mis-signed and expired credentials alike.
    #[error("Invalid session")]
    InvalidSession,

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),
}

impl From<CredentialError> for DomainError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::Signing(msg) => DomainError::TokenGenerationError(msg),
            CredentialError::InvalidExpiry(exp) => {
                DomainError::TokenGenerationError(format!("unrepresentable expiry {}", exp))
            }
            CredentialError::Missing
            | CredentialError::BadSignature
            | CredentialError::Expired(_)
            | CredentialError::Malformed(_) => DomainError::InvalidSession,
        }
    }
}
