//! Credential minting for tests.

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode, get_current_timestamp};

use super::claims::{Audience, CallerIdentity};

/// Base64url of `{"alg":"RS256","typ":"JWT"}`.
pub const RS256_HEADER_SEGMENT: &str = "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9";
/// Base64url of `{"alg":"none","typ":"JWT"}`.
pub const NONE_HEADER_SEGMENT: &str = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0";

/// Default credential lifetime, in seconds.
pub const DEFAULT_TTL_SECS: u64 = 3600;

/// Mints HMAC-signed credentials with a fixed secret.
#[derive(Debug, Clone)]
pub struct TokenFactory {
    secret: String,
    issuer: Option<String>,
    audience: Option<String>,
}

impl TokenFactory {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: None,
            audience: None,
        }
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// A fresh identity for `role`, valid for [`DEFAULT_TTL_SECS`].
    pub fn identity(&self, role: &str) -> CallerIdentity {
        let now = get_current_timestamp();
        CallerIdentity {
            sub: "user-1".to_string(),
            email: "evaluator@example.com".to_string(),
            role: role.to_string(),
            tenant_id: None,
            iss: self.issuer.clone(),
            aud: self.audience.clone().map(Audience::Single),
            exp: now + DEFAULT_TTL_SECS,
            iat: Some(now),
            nbf: None,
            jti: None,
        }
    }

    pub fn token_for_role(&self, role: &str) -> String {
        self.sign(&self.identity(role))
    }

    /// A credential whose expiry is an hour in the past.
    pub fn expired_token(&self, role: &str) -> String {
        let mut identity = self.identity(role);
        let now = get_current_timestamp();
        identity.iat = Some(now - 2 * DEFAULT_TTL_SECS);
        identity.exp = now - DEFAULT_TTL_SECS;
        self.sign(&identity)
    }

    pub fn sign(&self, identity: &CallerIdentity) -> String {
        self.sign_with(identity, Algorithm::HS256)
    }

    /// Signs with any HMAC algorithm.
    pub fn sign_with(&self, identity: &CallerIdentity, algorithm: Algorithm) -> String {
        encode(
            &Header::new(algorithm),
            identity,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .expect("HMAC encoding with a secret key cannot fail")
    }

    /// Signs arbitrary JSON claims (for malformed-claim cases).
    pub fn sign_raw(&self, claims: &serde_json::Value) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .expect("HMAC encoding with a secret key cannot fail")
    }
}

/// Replaces the header segment of `token`, keeping payload and signature.
pub fn with_header_segment(token: &str, header_segment: &str) -> String {
    match token.split_once('.') {
        Some((_, rest)) => format!("{}.{}", header_segment, rest),
        None => token.to_string(),
    }
}
