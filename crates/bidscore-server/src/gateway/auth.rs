use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use bidscore::{AuthError, CallerIdentity};

use super::error::GatewayError;
use super::state::HandlerState;

/// A caller whose bearer credential has been verified.
///
/// Extraction fails with `401` before the handler body runs, so a request with
/// a bad credential never reaches body decoding.
#[derive(Debug, Clone)]
pub struct AuthenticatedCaller(pub CallerIdentity);

impl FromRequestParts<HandlerState> for AuthenticatedCaller {
    type Rejection = GatewayError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &HandlerState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = match parts.headers.get(AUTHORIZATION) {
            Some(value) => Some(value.to_str().map_err(|_| AuthError::Unauthenticated)?),
            None => None,
        };

        let identity = state.authenticator.authenticate_header(header_value)?;
        Ok(AuthenticatedCaller(identity))
    }
}
