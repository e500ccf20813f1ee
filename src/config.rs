//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the sled database
    pub data_dir: PathBuf,
    /// Optional JSON file overriding the built-in reward catalog
    pub catalog_path: Option<PathBuf>,
    /// Artificial delay applied to session operations, in milliseconds.
    /// Useful for exercising client loading states; 0 disables it.
    pub simulated_latency_ms: u64,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            catalog_path: None,
            simulated_latency_ms: 0,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            data_dir: env::var("FITPULSE_DATA_DIR")
                .map(PathBuf::from)
                .map_err(|_| ConfigError::Missing("FITPULSE_DATA_DIR"))?,
            catalog_path: env::var("FITPULSE_CATALOG").ok().map(PathBuf::from),
            simulated_latency_ms: env::var("FITPULSE_SIMULATED_LATENCY_MS")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .unwrap_or(0),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
