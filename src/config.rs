use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

const DEFAULT_HOST: Ipv4Addr = Ipv4Addr::LOCALHOST;
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

/// Server settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub host: Ipv4Addr,
    pub port: u16,
    /// Drop and recreate every table on startup
    pub reset_schema: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let host = match lookup("HOST") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidEnvValue {
                var: "HOST".to_string(),
                reason: format!("{raw:?} is not an IPv4 address"),
            })?,
            None => DEFAULT_HOST,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: format!("{raw:?} is not a port number"),
            })?,
            None => DEFAULT_PORT,
        };

        let reset_schema = match lookup("RESET_SCHEMA").as_deref().map(str::trim) {
            None | Some("") | Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            Some(other) => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "RESET_SCHEMA".to_string(),
                    reason: format!("{other:?} is not a boolean"),
                })
            }
        };

        Ok(Config {
            database_url,
            host,
            port,
            reset_schema,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}
