use tracing::warn;

use super::claims::CallerIdentity;
use super::error::AuthError;

/// Admits `role` only if it is exactly one of `permitted`.
///
/// Comparison is case-sensitive and flat: no role implies another.
pub fn authorize(role: &str, permitted: &'static [&'static str]) -> Result<(), AuthError> {
    if permitted.contains(&role) {
        return Ok(());
    }

    warn!(role = %role, permitted = ?permitted, "Role not permitted");
    Err(AuthError::Forbidden {
        role: role.to_string(),
        permitted,
    })
}

/// Gate for an authenticated caller, used at the transport boundary.
pub fn require_role(
    identity: &CallerIdentity,
    permitted: &'static [&'static str],
) -> Result<(), AuthError> {
    authorize(identity.role(), permitted)
}
