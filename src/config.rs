use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "sehat";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Human-readable service name reported by `/health`.
pub const SERVICE_NAME: &str = "Multilingual Healthcare Assistant API";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_PATH: &str = "./healthcare.db";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

/// Maximum accepted request body size.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Default `tracing` filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> String {
    format!("{APP_NAME}=info,tower_http=info")
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("Invalid HOST value: {0}")]
    InvalidHost(String),
}

/// Runtime configuration, read once at start-up.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_path: PathBuf,
    /// `*` allows any origin.
    pub cors_origin: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub bhashini_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            cors_origin: "*".to_string(),
            openai_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            bhashini_key: None,
        }
    }
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Empty values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        let host = match get("HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw.clone()))?,
            None => defaults.host,
        };

        Ok(Self {
            host,
            port,
            database_path: get("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            cors_origin: get("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            openai_api_key: get("OPENAI_API_KEY"),
            openai_model: get("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            bhashini_key: get("BHASHINI_KEY"),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_empty() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.database_path, PathBuf::from("./healthcare.db"));
        assert_eq!(config.cors_origin, "*");
        assert_eq!(config.openai_model, "gpt-4o");
        assert!(config.openai_api_key.is_none());
        assert!(config.bhashini_key.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("DATABASE_PATH", "/tmp/triage.db"),
            ("CORS_ORIGIN", "https://clinic.example"),
            ("OPENAI_API_KEY", "sk-test"),
            ("BHASHINI_KEY", "bh-test"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.database_path, PathBuf::from("/tmp/triage.db"));
        assert_eq!(config.cors_origin, "https://clinic.example");
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.bhashini_key.as_deref(), Some("bh-test"));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = Config::from_lookup(lookup(&[("OPENAI_API_KEY", "  "), ("PORT", "")])).unwrap();
        assert!(config.openai_api_key.is_none());
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn invalid_port_rejected() {
        let err = Config::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("http".into()));
        assert!(Config::from_lookup(lookup(&[("PORT", "70000")])).is_err());
    }

    #[test]
    fn invalid_host_rejected() {
        let err = Config::from_lookup(lookup(&[("HOST", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost(_)));
    }

    #[test]
    fn log_filter_targets_crate() {
        assert_eq!(default_log_filter(), "sehat=info,tower_http=info");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
