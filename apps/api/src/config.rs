//! API server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults and passed into startup; nothing downstream reads the
//! environment directly.

use serde::{Deserialize, Serialize};
use std::env;

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// HTTP listen port
    pub http_port: u16,

    /// Path to the SQLite database file
    pub database_path: String,

    /// CORS allowed origins; empty means permissive (development)
    pub cors_origins: Vec<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable        | Default       |
    /// |-----------------|---------------|
    /// | `HTTP_PORT`     | `8080`        |
    /// | `DATABASE_PATH` | `ledger.db`   |
    /// | `CORS_ORIGINS`  | empty (permissive), comma-separated list |
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HTTP_PORT".to_string()))?,

            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "ledger.db".to_string()),

            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(ToString::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        };

        Ok(config)
    }

    /// The socket address string the server binds to.
    pub fn socket_addr(&self) -> String {
        format!("0.0.0.0:{}", self.http_port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = ApiConfig {
            http_port: 8080,
            database_path: "ledger.db".to_string(),
            cors_origins: Vec::new(),
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }
}
