use jsonwebtoken::{DecodingKey, Validation, decode};
use tracing::{debug, warn};

use super::claims::CallerIdentity;
use super::config::JwtConfig;
use super::error::AuthError;

pub const BEARER_PREFIX: &str = "Bearer ";

/// Extracts the credential from an `Authorization` header value.
///
/// Returns `None` if the value is not a bearer credential or the credential is blank.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Verifies HMAC-signed credentials against a process-wide shared secret.
///
/// Immutable after construction; share it behind an `Arc`.
pub struct Authenticator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("algorithms", &self.validation.algorithms)
            .field("leeway", &self.validation.leeway)
            .finish_non_exhaustive()
    }
}

impl Authenticator {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation: config.validation(),
        }
    }

    /// Verifies a raw credential and returns the caller's identity.
    ///
    /// Algorithm, signature, expiry, and (when configured) issuer/audience are all
    /// checked. The precise cause of a failure is logged, never returned.
    pub fn authenticate(&self, credential: &str) -> Result<CallerIdentity, AuthError> {
        match decode::<CallerIdentity>(credential, &self.decoding_key, &self.validation) {
            Ok(token_data) => {
                debug!(
                    user_id = %token_data.claims.sub,
                    role = %token_data.claims.role,
                    alg = ?token_data.header.alg,
                    "Credential verified"
                );
                Ok(token_data.claims)
            }
            Err(err) => {
                warn!(reason = %err, "Credential rejected");
                Err(AuthError::Unauthenticated)
            }
        }
    }

    /// Verifies the value of an `Authorization` header (`Bearer <credential>`).
    pub fn authenticate_header(&self, header_value: Option<&str>) -> Result<CallerIdentity, AuthError> {
        let header_value = header_value.ok_or(AuthError::MissingCredential)?;
        let credential = bearer_token(header_value).ok_or_else(|| {
            warn!("Authorization header is not a bearer credential");
            AuthError::Unauthenticated
        })?;
        self.authenticate(credential)
    }
}
