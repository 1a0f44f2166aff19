//! Server configuration from environment variables.

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl ServerConfig {
    /// Read `NOTES_BIND` (host:port), falling back to [`DEFAULT_BIND`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("NOTES_BIND").unwrap_or_else(|_| DEFAULT_BIND.into());
        Self::from_bind(&raw)
    }

    pub fn from_bind(raw: &str) -> Result<Self, ConfigError> {
        let bind = raw
            .parse()
            .map_err(|_| ConfigError::InvalidBind(raw.to_owned()))?;
        Ok(Self { bind })
    }
}
