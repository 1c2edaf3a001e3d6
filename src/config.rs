//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::constants::{
    store_backends, DEFAULT_PROVIDER_BASE_URL, DEFAULT_PROVIDER_USER_AGENT, DEFAULT_REDIS_URL,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_STORE_DIR, DEFAULT_STORE_KEY,
    DEFAULT_TIMEFRAME,
};
use crate::models::Timeframe;

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub store: StoreConfig,
    pub leaderboard: LeaderboardConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Remote provider configuration
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub user_agent: String,
}

/// Which blob store backs the tracked-user list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    File,
    Memory,
}

/// Tracked-user store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub redis_url: String,
    /// Directory used by the file backend
    pub dir: PathBuf,
    /// Key the tracked-user collection lives under
    pub key: String,
}

/// Leaderboard defaults
#[derive(Debug, Clone)]
pub struct LeaderboardConfig {
    pub default_timeframe: Timeframe,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            provider: ProviderConfig::from_env()?,
            store: StoreConfig::from_env()?,
            leaderboard: LeaderboardConfig::from_env()?,
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

impl ProviderConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("PROVIDER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_PROVIDER_BASE_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue("PROVIDER_BASE_URL".to_string()));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: env::var("PROVIDER_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_PROVIDER_USER_AGENT.to_string()),
        })
    }
}

impl StoreConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let backend: StoreBackend = env::var("STORE_BACKEND")
            .unwrap_or_else(|_| store_backends::REDIS.to_string())
            .parse()?;

        Ok(Self {
            backend,
            redis_url: env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string()),
            dir: PathBuf::from(env::var("STORE_DIR").unwrap_or_else(|_| DEFAULT_STORE_DIR.to_string())),
            key: env::var("STORE_KEY").unwrap_or_else(|_| DEFAULT_STORE_KEY.to_string()),
        })
    }
}

impl LeaderboardConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            default_timeframe: env::var("DEFAULT_TIMEFRAME")
                .unwrap_or_else(|_| DEFAULT_TIMEFRAME.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DEFAULT_TIMEFRAME".to_string()))?,
        })
    }
}

impl std::str::FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            store_backends::REDIS => Ok(Self::Redis),
            store_backends::FILE => Ok(Self::File),
            store_backends::MEMORY => Ok(Self::Memory),
            _ => Err(ConfigError::InvalidValue(format!(
                "STORE_BACKEND (expected one of: {})",
                store_backends::ALL.join(", ")
            ))),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
