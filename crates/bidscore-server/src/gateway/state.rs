use std::sync::Arc;

use axum::http::HeaderValue;

use bidscore::{Authenticator, Config, JwtConfig};

use super::error::GatewayError;

#[derive(Debug, Clone)]
pub struct HandlerState {
    pub authenticator: Arc<Authenticator>,

    /// `None` allows any origin.
    pub allowed_origin: Option<HeaderValue>,
}

impl HandlerState {
    pub fn new(authenticator: Arc<Authenticator>) -> Self {
        Self {
            authenticator,
            allowed_origin: None,
        }
    }

    pub fn from_jwt_config(jwt_config: &JwtConfig) -> Self {
        Self::new(Arc::new(Authenticator::new(jwt_config)))
    }

    /// Builds the state for a validated [`Config`].
    pub fn from_config(config: &Config) -> Result<Self, GatewayError> {
        let state = Self::from_jwt_config(&config.jwt_config());
        if config.allows_any_origin() {
            return Ok(state);
        }

        let origin = HeaderValue::from_str(&config.cors_origin).map_err(|e| {
            GatewayError::InternalError(format!("invalid CORS origin header: {}", e))
        })?;
        Ok(state.with_allowed_origin(origin))
    }

    pub fn with_allowed_origin(mut self, origin: HeaderValue) -> Self {
        self.allowed_origin = Some(origin);
        self
    }
}
