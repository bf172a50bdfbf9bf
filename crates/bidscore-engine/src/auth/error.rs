use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No credential was presented at all.
    #[error("authorization header required")]
    MissingCredential,

    /// Malformed, mis-signed, expired, or wrong-algorithm credential.
    #[error("invalid credential")]
    Unauthenticated,

    /// Valid credential whose role is not in the permitted set.
    #[error("access denied, required roles: [{}]", .permitted.join(", "))]
    Forbidden {
        role: String,
        permitted: &'static [&'static str],
    },
}

impl AuthError {
    /// Returns `true` for the failures that mean "who are you?" rather than "not allowed".
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            AuthError::MissingCredential | AuthError::Unauthenticated
        )
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, AuthError::Forbidden { .. })
    }
}
