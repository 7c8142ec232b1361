//! Configuration Management
//!
//! Handles persistent configuration storage for spctl.

use crate::pms::client::DEFAULT_ENDPOINT;
use crate::pms::http::HttpOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the configured endpoint
pub const ENDPOINT_ENV: &str = "SPCTL_PMS_ENDPOINT";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// PMS REST endpoint
    #[serde(default)]
    pub pms_endpoint: Option<String>,
    /// Extra CA bundle (PEM)
    #[serde(default)]
    pub cacert: Option<PathBuf>,
    /// Skip TLS verification
    #[serde(default)]
    pub insecure: bool,
    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("spctl").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from `path`; missing or unreadable files give defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed config {:?}: {}", path, e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Get effective endpoint (CLI > env > config > default)
    pub fn effective_endpoint(&self, cli: Option<&str>) -> String {
        let env = std::env::var(ENDPOINT_ENV).ok();
        resolve_endpoint(cli, env.as_deref(), self.pms_endpoint.as_deref())
    }

    /// Merge CLI transport flags over the configured ones
    pub fn http_options(
        &self,
        cacert: Option<PathBuf>,
        insecure: bool,
        timeout_secs: Option<u64>,
    ) -> HttpOptions {
        HttpOptions {
            cacert: cacert.or_else(|| self.cacert.clone()),
            insecure: insecure || self.insecure,
            timeout: timeout_secs
                .or(self.timeout_secs)
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}

fn resolve_endpoint(cli: Option<&str>, env: Option<&str>, config: Option<&str>) -> String {
    [cli, env, config]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(DEFAULT_ENDPOINT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_precedence() {
        assert_eq!(
            resolve_endpoint(Some("http://cli/"), Some("http://env/"), Some("http://cfg/")),
            "http://cli/"
        );
        assert_eq!(
            resolve_endpoint(None, Some("http://env/"), Some("http://cfg/")),
            "http://env/"
        );
        assert_eq!(resolve_endpoint(None, None, Some("http://cfg/")), "http://cfg/");
        assert_eq!(resolve_endpoint(None, None, None), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_blank_endpoint_values_are_skipped() {
        assert_eq!(resolve_endpoint(Some(""), Some("  "), Some("http://cfg/")), "http://cfg/");
    }

    #[test]
    fn test_http_options_merge() {
        let config = Config {
            cacert: Some(PathBuf::from("/etc/pms/ca.pem")),
            insecure: true,
            timeout_secs: Some(30),
            ..Config::default()
        };

        let opts = config.http_options(None, false, None);
        assert_eq!(opts.cacert, Some(PathBuf::from("/etc/pms/ca.pem")));
        assert!(opts.insecure);
        assert_eq!(opts.timeout, Some(Duration::from_secs(30)));

        let opts = config.http_options(Some(PathBuf::from("ca.pem")), false, Some(0));
        assert_eq!(opts.cacert, Some(PathBuf::from("ca.pem")));
        assert_eq!(opts.timeout, None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("spctl-config-test-{}", std::process::id()));
        let path = dir.join("nested").join("config.json");
        let config = Config {
            pms_endpoint: Some("https://pms.example:6733/policy-mgmt/v1/".into()),
            timeout_secs: Some(5),
            ..Config::default()
        };

        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(Config::load_from(&path), config);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_or_malformed_config_gives_defaults() {
        let dir = std::env::temp_dir().join(format!("spctl-config-bad-{}", std::process::id()));
        assert_eq!(Config::load_from(&dir.join("absent.json")), Config::default());

        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
