//! API configuration
//!
//! Loaded from `RENTAL_*` environment variables (a `.env` file is honored
//! by the server binary):
//!
//! * `RENTAL_HOST` - Server host (default: 0.0.0.0)
//! * `RENTAL_PORT` - Server port (default: 8080)
//! * `RENTAL_DATA_DIR` - Directory holding `rooms.json` and `addons.json` (default: data)
//! * `RENTAL_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::path::PathBuf;

use config::{Config, Environment};
use serde::Deserialize;

use core_kernel::CoreError;

const ENV_PREFIX: &str = "RENTAL";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Catalog data directory
    pub data_dir: PathBuf,
    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            data_dir: PathBuf::from("data"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the environment, falling back to defaults
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    pub(crate) fn from_environment(environment: Environment) -> Result<Self, CoreError> {
        let defaults = Self::default();

        let config: Self = Config::builder()
            .set_default("host", defaults.host)
            .and_then(|b| b.set_default("port", i64::from(defaults.port)))
            .and_then(|b| b.set_default("data_dir", defaults.data_dir.to_string_lossy().into_owned()))
            .and_then(|b| b.set_default("log_level", defaults.log_level))
            .map_err(|e| CoreError::configuration(e.to_string()))?
            .add_source(environment.try_parsing(true))
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| CoreError::configuration(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Checks values the type system does not
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.port == 0 {
            return Err(CoreError::configuration("port must be non-zero"));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(CoreError::configuration(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = AppConfig::from_environment(environment(&[])).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let config = AppConfig::from_environment(environment(&[
            ("RENTAL_PORT", "9090"),
            ("RENTAL_DATA_DIR", "/var/lib/rental"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/rental"));
        assert_eq!(config.server_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let err = AppConfig::from_environment(environment(&[("RENTAL_LOG_LEVEL", "chatty")]))
            .unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = AppConfig::from_environment(environment(&[("RENTAL_PORT", "not-a-port")]));
        assert!(result.is_err());
    }
}
