//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;
use std::time::Duration;

use crate::constants::{
    DEFAULT_BACKEND_API_URL, DEFAULT_BACKEND_TIMEOUT_SECONDS, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, DEFAULT_SESSION_EXPIRY_HOURS,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub session: SessionConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Resort REST backend configuration
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL, without trailing slash
    pub api_url: String,
    pub timeout_seconds: u64,
}

/// Session token configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub expiry_hours: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            backend: BackendConfig::from_env()?,
            session: SessionConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl BackendConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var("BACKEND_API_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_API_URL.to_string());

        Ok(Self {
            api_url: normalize_base_url(&api_url)?,
            timeout_seconds: env::var("BACKEND_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| DEFAULT_BACKEND_TIMEOUT_SECONDS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BACKEND_TIMEOUT_SECONDS".to_string()))?,
        })
    }

    /// Request timeout for backend calls
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl SessionConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env::var("SESSION_SECRET")
            .map_err(|_| ConfigError::Missing("SESSION_SECRET".to_string()))?;
        if secret.trim().is_empty() {
            return Err(ConfigError::InvalidValue("SESSION_SECRET".to_string()));
        }

        let expiry_hours: i64 = env::var("SESSION_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_SESSION_EXPIRY_HOURS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SESSION_EXPIRY_HOURS".to_string()))?;
        if expiry_hours <= 0 {
            return Err(ConfigError::InvalidValue("SESSION_EXPIRY_HOURS".to_string()));
        }

        Ok(Self {
            secret,
            expiry_hours,
        })
    }
}

/// Trim trailing slashes and require an http(s) scheme
fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidValue("BACKEND_API_URL".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
