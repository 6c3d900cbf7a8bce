use dashmap::DashMap;
use std::env;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    Invalid { key: String, value: String },
}

/// Key/value configuration source, loaded from the process environment
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    /// An empty service; use [`ConfigService::from_env`] for the real thing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    fn parse_or<T: FromStr>(&self, key: &str, default: T) -> Result<T, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                key: key.to_string(),
                value,
            }),
        }
    }

    fn flag_or(&self, key: &str, default: bool) -> Result<bool, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::Invalid {
                    key: key.to_string(),
                    value,
                }),
            },
        }
    }
}

/// Typed service settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub seed_demo_data: bool,
    pub log_level: String,
    pub init_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            seed_demo_data: true,
            log_level: "info".to_string(),
            init_timeout: Duration::from_secs(30),
        }
    }
}

impl AppConfig {
    /// Read `HOST`, `PORT`, `SEED_DEMO_DATA`, `LOG_LEVEL` and
    /// `INIT_TIMEOUT_SECS`, falling back to defaults for missing keys.
    pub fn from_service(service: &ConfigService) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: service.get("HOST").unwrap_or(defaults.host),
            port: service.parse_or("PORT", defaults.port)?,
            seed_demo_data: service.flag_or("SEED_DEMO_DATA", defaults.seed_demo_data)?,
            log_level: service.get("LOG_LEVEL").unwrap_or(defaults.log_level),
            init_timeout: Duration::from_secs(
                service.parse_or("INIT_TIMEOUT_SECS", defaults.init_timeout.as_secs())?,
            ),
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_service(&ConfigService::from_env())
    }
}
