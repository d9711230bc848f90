use axum::http::HeaderValue;
use std::{env, net::SocketAddr};

/// Address the service binds to when `BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "neer_manthan=debug,tower_http=info,axum=trace";

/// AppConfig
///
/// Holds the service configuration. Immutable once loaded and shared with handlers
/// through `AppState` via `FromRef`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Selects the log format and the CORS policy.
    pub env: Env,
    pub bind_addr: SocketAddr,
    // Origin allowed by CORS. `None` allows any origin (local only).
    pub cors_allowed_origin: Option<HeaderValue>,
}

/// Env
///
/// Runtime context: `Local` for development (pretty logs, open CORS), `Production` for
/// deployments (JSON logs, a pinned CORS origin).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Env {
    Local,
    Production,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in production")]
    Missing(&'static str),
    #[error("{name} is not a valid socket address: `{value}`")]
    InvalidAddress { name: &'static str, value: String },
    #[error("{name} is not a valid origin header value: `{value}`")]
    InvalidOrigin { name: &'static str, value: String },
}

impl Default for AppConfig {
    /// Local configuration with the default bind address, for test setup.
    fn default() -> Self {
        Self {
            env: Env::Local,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            cors_allowed_origin: None,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads the configuration from the environment and fails fast on anything missing or
    /// malformed, so the service never starts half-configured.
    ///
    /// - `APP_ENV`: `production` or anything else for local.
    /// - `BIND_ADDR`: socket address, default `0.0.0.0:3000`.
    /// - `CORS_ALLOWED_ORIGIN`: required in production.
    pub fn load() -> Result<Self, ConfigError> {
        let env = match env::var("APP_ENV").as_deref() {
            Ok("production") => Env::Production,
            _ => Env::Local,
        };

        let raw_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddress {
                name: "BIND_ADDR",
                value: raw_addr.clone(),
            })?;

        let raw_origin = match env {
            Env::Production => Some(
                env::var("CORS_ALLOWED_ORIGIN")
                    .map_err(|_| ConfigError::Missing("CORS_ALLOWED_ORIGIN"))?,
            ),
            Env::Local => env::var("CORS_ALLOWED_ORIGIN").ok(),
        };
        let cors_allowed_origin = raw_origin
            .map(|origin| {
                HeaderValue::from_str(&origin).map_err(|_| ConfigError::InvalidOrigin {
                    name: "CORS_ALLOWED_ORIGIN",
                    value: origin.clone(),
                })
            })
            .transpose()?;

        Ok(Self {
            env,
            bind_addr,
            cors_allowed_origin,
        })
    }
}
