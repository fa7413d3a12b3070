/// Server configuration module
/// All settings come from the environment, with development defaults.
use axum::http::HeaderValue;
use std::env;
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address: {0}")]
    InvalidBindAddr(String),
    #[error("Invalid port: {0}")]
    InvalidPort(String),
    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_str = env::var("METRICS_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
        let bind_addr = bind_str
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_str.clone()))?;

        let port_str = env::var("METRICS_PORT").unwrap_or_else(|_| "3001".to_string());
        let port = port_str
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port_str.clone()))?;
        if port == 0 {
            return Err(ConfigError::InvalidPort(port_str));
        }

        let cors_origins: Vec<String> = env::var("METRICS_CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        info!(
            "Server configuration loaded: bind={}, port={}, cors_origins={}",
            bind_addr,
            port,
            cors_origins.len()
        );

        Ok(ServerConfig {
            bind_addr,
            port,
            cors_origins,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Parse the configured origins into header values for the CORS layer.
    pub fn allowed_origins(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.cors_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ConfigError::InvalidOrigin(origin.clone()))
            })
            .collect()
    }
}
