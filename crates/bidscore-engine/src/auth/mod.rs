//! Bearer credential verification and role gates.
//!
//! [`Authenticator`] turns an HMAC-signed JWT into a [`CallerIdentity`];
//! [`authorize`] / [`require_role`] admit or refuse a caller by exact role match.
//! Every authentication failure collapses into [`AuthError::Unauthenticated`] so the
//! caller never learns which check failed.

pub mod authenticator;
pub mod authorizer;
pub mod claims;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use authenticator::{Authenticator, BEARER_PREFIX, bearer_token};
pub use authorizer::{authorize, require_role};
pub use claims::{Audience, CallerIdentity};
pub use config::{HMAC_ALGORITHMS, JwtConfig, LEEWAY_SECS};
pub use error::AuthError;
#[cfg(any(test, feature = "mock"))]
pub use mock::TokenFactory;
