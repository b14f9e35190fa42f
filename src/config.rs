//! Dispatch configuration loaded from `dispatch.toml`.
//!
//! [`DispatchConfig`] holds the status-service settings. Keys missing from the
//! file fall back to defaults. `ROBOT_STATUS_BASE_URL` overrides the file's
//! base URL, and the CLI `--base-url` flag overrides both.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::error::DispatchError;
use crate::status::client::{DEFAULT_BASE_URL, DEFAULT_ROBOTS_PATH};

pub const CONFIG_FILE: &str = "dispatch.toml";
pub const BASE_URL_ENV: &str = "ROBOT_STATUS_BASE_URL";

#[derive(Debug, Clone, Deserialize)]
pub struct DispatchConfig {
    /// Base address of the fleet status service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the roster endpoint, relative to `base_url`.
    #[serde(default = "default_robots_path")]
    pub robots_path: String,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Whole-request timeout for the roster fetch.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_robots_path() -> String {
    DEFAULT_ROBOTS_PATH.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            robots_path: default_robots_path(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl DispatchConfig {
    /// Load the config file at `path` (normally [`CONFIG_FILE`]), then apply the
    /// environment override.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::load_from(path)?;

        if let Ok(url) = std::env::var(BASE_URL_ENV)
            && !url.is_empty()
        {
            config.base_url = url;
        }

        Ok(config)
    }

    /// Load from `path`, using defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<DispatchConfig>(&contents)?
        } else {
            Self::default()
        };
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DispatchError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(DispatchError::Config(format!(
                "base_url must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }
        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err(DispatchError::Config(
                "timeouts must be at least one second".to_string(),
            ));
        }
        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = DispatchConfig::default();
        assert_eq!(config.base_url, "https://svtrobotics.free.beeceptor.com");
        assert_eq!(config.robots_path, "robots");
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserialize_partial_toml() {
        let toml_str = r#"
            base_url = "http://localhost:8080"
            request_timeout_secs = 5
        "#;
        let config: DispatchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.robots_path, "robots");
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DispatchConfig::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.robots_path, "robots");
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "robots_path = \"fleet/status\"\n").unwrap();

        let config = DispatchConfig::load_from(&path).unwrap();
        assert_eq!(config.robots_path, "fleet/status");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn load_from_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "connect_timeout_secs = \"soon\"\n").unwrap();

        assert!(DispatchConfig::load_from(&path).is_err());
    }

    #[test]
    fn validate_rejects_non_http_url() {
        let config = DispatchConfig {
            base_url: "ftp://fleet".into(),
            ..DispatchConfig::default()
        };
        assert!(matches!(config.validate(), Err(DispatchError::Config(_))));
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let config = DispatchConfig {
            connect_timeout_secs: 0,
            ..DispatchConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
