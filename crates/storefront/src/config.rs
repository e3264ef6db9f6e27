//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `TWENZEE_DATA_DIR` - Directory for persisted state (default: `./data`)
//! - `TWENZEE_CATALOG_PATH` - Product catalog JSON file (default:
//!   `<data_dir>/catalog.json`)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "./data";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the persisted cart, order log, and customer info
    pub data_dir: PathBuf,
    /// Product catalog JSON file
    pub catalog_path: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable holds an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir =
            PathBuf::from(get_non_empty("TWENZEE_DATA_DIR", DEFAULT_DATA_DIR)?);
        let catalog_path = match std::env::var("TWENZEE_CATALOG_PATH") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "TWENZEE_CATALOG_PATH".to_string(),
                    "must not be empty".to_string(),
                ));
            }
            Ok(value) => PathBuf::from(value),
            Err(_) => data_dir.join("catalog.json"),
        };

        Ok(Self {
            data_dir,
            catalog_path,
        })
    }
}

/// Get an environment variable with a default, rejecting empty values.
fn get_non_empty(key: &str, default: &str) -> Result<String, ConfigError> {
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be empty".to_string(),
        )),
        Ok(value) => Ok(value),
        Err(_) => Ok(default.to_string()),
    }
}
