//! Configuration management for the contact registry.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use crate::storage::DEFAULT_SUFFIXES;
use std::env;
use std::path::PathBuf;

/// Configuration for the contact registry binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the registry file (default: "addressbook.txt")
    pub registry_file: PathBuf,

    /// File-name suffixes the store accepts, without the dot (default: ["txt"])
    pub accepted_suffixes: Vec<String>,

    /// Log level used when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_REGISTRY_FILE`: registry file path (default: "addressbook.txt")
    /// - `CONTACT_REGISTRY_SUFFIXES`: comma-separated accepted suffixes (default: "txt")
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let registry_file = match env::var("CONTACT_REGISTRY_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_REGISTRY_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val.trim()),
            Err(_) => defaults.registry_file,
        };

        let accepted_suffixes = match env::var("CONTACT_REGISTRY_SUFFIXES") {
            Ok(val) => Self::parse_suffixes("CONTACT_REGISTRY_SUFFIXES", &val)?,
            Err(_) => defaults.accepted_suffixes,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            registry_file,
            accepted_suffixes,
            log_level,
        })
    }

    /// Parse a comma-separated suffix list. A leading dot on an entry is dropped.
    fn parse_suffixes(var_name: &str, raw: &str) -> ConfigResult<Vec<String>> {
        let suffixes: Vec<String> = raw
            .split(',')
            .map(|s| s.trim().trim_start_matches('.'))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if suffixes.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must list at least one suffix, got: {:?}", raw),
            });
        }
        Ok(suffixes)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            registry_file: PathBuf::from("addressbook.txt"),
            accepted_suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            log_level: "info".to_string(),
        }
    }
}
