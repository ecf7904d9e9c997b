//! # Teller Security
//! 
//! Session credential signing and verification, signing key resolution,
//! and the session cookie adapter.

pub mod clock;
pub mod session_cookie;
pub mod credential;
pub mod key;

pub use clock::{Clock, FixedClock, SystemClock};
pub use session_cookie::CookieStore;
pub use ::cookie::Cookie;
pub use credential::{CredentialError, CredentialService, IssuedCredential, SessionClaims};
pub use key::SigningKey;
