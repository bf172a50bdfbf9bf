use thiserror::Error;

use crate::auth::AuthError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// The engine's own role gate refused the caller.
    #[error("forbidden: {0}")]
    Forbidden(#[source] AuthError),
}
