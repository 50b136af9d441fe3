//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `AURA_DATA_DIR` - Directory holding the persisted cart and wishlist
//!   slots (default: `.aura` in the working directory)

use std::path::PathBuf;

use thiserror::Error;

const DATA_DIR_ENV: &str = "AURA_DATA_DIR";
const DEFAULT_DATA_DIR: &str = ".aura";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// Resolved CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory for the storage backend's slot files.
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `AURA_DATA_DIR` is set but
    /// empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    DATA_DIR_ENV,
                    "must not be empty".to_string(),
                ));
            }
            Ok(value) => PathBuf::from(value),
            Err(_) => PathBuf::from(DEFAULT_DATA_DIR),
        };

        Ok(Self { data_dir })
    }
}
