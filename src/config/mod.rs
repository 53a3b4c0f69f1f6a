//! Configuration module for the volunteer roster.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the persisted roster blob
    pub data_path: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let data_path = env::var("ROSTER_DATA_PATH")
            .unwrap_or_else(|_| "./data/roster.json".to_string())
            .into();

        let log_level = env::var("ROSTER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            data_path,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        env::remove_var("ROSTER_DATA_PATH");
        env::remove_var("ROSTER_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.data_path, PathBuf::from("./data/roster.json"));
        assert_eq!(config.log_level, "info");
    }
}
