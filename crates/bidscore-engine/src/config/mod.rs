//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `BIDSCORE_*` environment variables.
//! The JWT secret has no default: [`Config::from_env`] fails without it.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;

use crate::auth::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `BIDSCORE_*` overrides on top of defaults.
#[derive(Clone)]
pub struct Config {
    /// HTTP server port. Default: `9090`.
    pub port: u16,

    /// IP address to bind to. Default: `0.0.0.0`.
    pub bind_addr: IpAddr,

    /// Shared HMAC secret for bearer credential verification. Required.
    pub jwt_secret: String,

    /// Expected `iss` claim, if any.
    pub jwt_issuer: Option<String>,

    /// Expected `aud` claim, if any.
    pub jwt_audience: Option<String>,

    /// Allowed CORS origin. `*` allows any origin. Default: `*`.
    pub cors_origin: String,
}

/// Value of [`Config::cors_origin`] that allows any origin.
pub const ANY_ORIGIN: &str = "*";

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 9090,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
            jwt_secret: String::new(),
            jwt_issuer: None,
            jwt_audience: None,
            cors_origin: ANY_ORIGIN.to_string(),
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("bind_addr", &self.bind_addr)
            .field("jwt_secret", &"<redacted>")
            .field("jwt_issuer", &self.jwt_issuer)
            .field("jwt_audience", &self.jwt_audience)
            .field("cors_origin", &self.cors_origin)
            .finish()
    }
}

impl Config {
    pub const ENV_PORT: &'static str = "BIDSCORE_PORT";
    pub const ENV_BIND_ADDR: &'static str = "BIDSCORE_BIND_ADDR";
    pub const ENV_JWT_SECRET: &'static str = "BIDSCORE_JWT_SECRET";
    /// Secret shared with the rest of the platform; read when
    /// `BIDSCORE_JWT_SECRET` is unset or blank.
    pub const ENV_SHARED_JWT_SECRET: &'static str = "JWT_SECRET";
    pub const ENV_JWT_ISSUER: &'static str = "BIDSCORE_JWT_ISSUER";
    pub const ENV_JWT_AUDIENCE: &'static str = "BIDSCORE_JWT_AUDIENCE";
    pub const ENV_CORS_ORIGIN: &'static str = "BIDSCORE_CORS_ORIGIN";

    /// Loads configuration from environment variables (falling back to defaults).
    ///
    /// Fails with [`ConfigError::MissingEnvVar`] when neither `BIDSCORE_JWT_SECRET`
    /// nor `JWT_SECRET` holds a non-blank value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let jwt_secret = Self::parse_optional_string_from_env(Self::ENV_JWT_SECRET)
            .or_else(|| Self::parse_optional_string_from_env(Self::ENV_SHARED_JWT_SECRET))
            .ok_or(ConfigError::MissingEnvVar {
                name: Self::ENV_JWT_SECRET,
            })?;
        let jwt_issuer = Self::parse_optional_string_from_env(Self::ENV_JWT_ISSUER);
        let jwt_audience = Self::parse_optional_string_from_env(Self::ENV_JWT_AUDIENCE);
        let cors_origin =
            Self::parse_optional_string_from_env(Self::ENV_CORS_ORIGIN).unwrap_or(defaults.cors_origin);

        Ok(Self {
            port,
            bind_addr,
            jwt_secret,
            jwt_issuer,
            jwt_audience,
            cors_origin,
        })
    }

    /// Checks invariants that `from_env` cannot guarantee for hand-built configs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort {
                value: self.port.to_string(),
            });
        }

        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar {
                name: Self::ENV_JWT_SECRET,
            });
        }

        if self.cors_origin != ANY_ORIGIN
            && !(self.cors_origin.starts_with("http://") || self.cors_origin.starts_with("https://"))
        {
            return Err(ConfigError::InvalidCorsOrigin {
                value: self.cors_origin.clone(),
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        match self.bind_addr {
            IpAddr::V4(addr) => format!("{}:{}", addr, self.port),
            IpAddr::V6(addr) => format!("[{}]:{}", addr, self.port),
        }
    }

    /// Builds the credential verification settings handed to the authenticator.
    pub fn jwt_config(&self) -> JwtConfig {
        let mut jwt = JwtConfig::new(self.jwt_secret.clone());
        if let Some(issuer) = &self.jwt_issuer {
            jwt = jwt.with_issuer(issuer.clone());
        }
        if let Some(audience) = &self.jwt_audience {
            jwt = jwt.with_audience(audience.clone());
        }
        jwt
    }

    /// Returns `true` when any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origin == ANY_ORIGIN
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
