//! Dashboard configuration.
//!
//! Resolution order, later wins:
//! 1. Built-in defaults
//! 2. The TOML file named by `DASHBOARD_CONFIG`, if set
//! 3. `DASHBOARD_BASE_URL`, `DASHBOARD_PAGE_SIZE`, `DASHBOARD_CHANNEL_BUFFER`

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::view::DEFAULT_PAGE_SIZE;

pub const CONFIG_PATH_VAR: &str = "DASHBOARD_CONFIG";
pub const BASE_URL_VAR: &str = "DASHBOARD_BASE_URL";
pub const PAGE_SIZE_VAR: &str = "DASHBOARD_PAGE_SIZE";
pub const CHANNEL_BUFFER_VAR: &str = "DASHBOARD_CHANNEL_BUFFER";

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Root of the directory service; `/users` is appended.
    pub base_url: String,
    /// Records per page, used by both the projection and the page correction.
    pub page_size: usize,
    /// Capacity of the record store's request channel.
    pub channel_buffer: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            page_size: DEFAULT_PAGE_SIZE,
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl DashboardConfig {
    /// Resolves configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`DashboardConfig::load`], reading variables through `lookup`.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(v) = lookup(BASE_URL_VAR) {
            config.base_url = v;
        }
        if let Some(v) = lookup(PAGE_SIZE_VAR) {
            config.page_size = parse_count(PAGE_SIZE_VAR, &v)?;
        }
        if let Some(v) = lookup(CHANNEL_BUFFER_VAR) {
            config.channel_buffer = parse_count(CHANNEL_BUFFER_VAR, &v)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw, &path.display().to_string())
    }

    /// Parses TOML; `origin` only labels errors. Missing keys keep their defaults.
    pub fn from_toml_str(raw: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "base_url",
                value: self.base_url.clone(),
            });
        }
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "page_size",
                value: "0".into(),
            });
        }
        if self.channel_buffer == 0 {
            return Err(ConfigError::InvalidValue {
                key: "channel_buffer",
                value: "0".into(),
            });
        }
        Ok(())
    }
}

fn parse_count(key: &'static str, raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = DashboardConfig::load_with(env(&[])).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.page_size, 5);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config =
            DashboardConfig::from_toml_str("base_url = \"http://localhost:3000\"\n", "inline").unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.channel_buffer, DEFAULT_CHANNEL_BUFFER);
    }

    #[test]
    fn test_file_rejects_unknown_keys_and_zero_sizes() {
        assert!(matches!(
            DashboardConfig::from_toml_str("pagesize = 3", "inline"),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            DashboardConfig::from_toml_str("page_size = 0", "inline"),
            Err(ConfigError::InvalidValue { key: "page_size", .. })
        ));
    }

    #[test]
    fn test_environment_overrides() {
        let config = DashboardConfig::load_with(env(&[
            (BASE_URL_VAR, "http://127.0.0.1:8080/api"),
            (PAGE_SIZE_VAR, "10"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080/api");
        assert_eq!(config.page_size, 10);

        let err = DashboardConfig::load_with(env(&[(PAGE_SIZE_VAR, "five")])).unwrap_err();
        assert!(err.to_string().contains(PAGE_SIZE_VAR));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let err = DashboardConfig::load_with(env(&[(CONFIG_PATH_VAR, "/nonexistent/dashboard.toml")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
