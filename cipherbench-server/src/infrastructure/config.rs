//! Server configuration
//!
//! Read once from the environment at startup; this service has no mutable
//! or hot-reloaded configuration.

use std::env;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use cipherbench_core::shared::constants::MAX_UPLOAD_BYTES;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// TCP port to listen on (`PORT`, default 5000)
    pub port: u16,
    /// Log level for the service's own targets (`LOG_LEVEL`, default info)
    pub log_level: String,
    /// Upload ceiling for file benchmarks (`MAX_UPLOAD_BYTES`, default 10MB)
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            log_level: "info".to_string(),
            max_upload_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    /// Build a configuration from the process environment, falling back to
    /// defaults for unset variables and failing on unparseable ones.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| anyhow!("Invalid PORT value: '{raw}'"))?,
            Err(_) => defaults.port,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        let max_upload_bytes = match env::var("MAX_UPLOAD_BYTES") {
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|_| anyhow!("Invalid MAX_UPLOAD_BYTES value: '{raw}'"))?,
            Err(_) => defaults.max_upload_bytes,
        };

        let config = Self {
            port,
            log_level,
            max_upload_bytes,
        };

        let errors = config.validate();
        if !errors.is_empty() {
            return Err(anyhow!(
                "Configuration validation failed: {}",
                errors.join(", ")
            ));
        }

        Ok(config)
    }

    /// Collect every validation problem instead of stopping at the first.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("port must be non-zero".to_string());
        }
        if self.max_upload_bytes == 0 {
            errors.push("max_upload_bytes must be non-zero".to_string());
        }
        if !["trace", "debug", "info", "warn", "error"].contains(&self.log_level.as_str()) {
            errors.push(format!("unknown log level '{}'", self.log_level));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();

        assert_eq!(config.port, 5000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = ServerConfig {
            port: 0,
            log_level: "loud".to_string(),
            max_upload_bytes: 0,
        };

        let errors = config.validate();
        assert_eq!(errors.len(), 3);
    }
}
