//! Site configuration loading.
//!
//! Configuration is loaded from a TOML file with the following resolution
//! order:
//! 1. `--config <path>` / explicit path (must exist)
//! 2. `./_config.toml` (site root)
//! 3. `<config dir>/flickr-tag/config.toml` (user, e.g. `~/.config/flickr-tag/config.toml`)
//!
//! When no file is found the defaults apply. The API key may also come from
//! the `FLICKR_API_KEY` environment variable; the file takes precedence.
//!
//! ```toml
//! [flickr]
//! api_key = "21u3gj12kg34jh12gk3j4hg1k2j3h4g"
//! request_timeout_secs = 10
//! markup = "figure"
//! missing_size = "placeholder"
//!
//! [cache]
//! max_entries = 5000
//! ttl_secs = 3600
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::cache::CacheConfig;
use crate::transport::DEFAULT_BASE_URL;
use crate::types::{MarkupStyle, MissingSizePolicy};
use crate::{FlickrError, Result};

/// Environment variable consulted when the file has no API key.
pub const API_KEY_ENV: &str = "FLICKR_API_KEY";

/// Site configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub flickr: FlickrConfig,
    #[serde(default)]
    pub cache: CacheSection,
}

/// The `[flickr]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct FlickrConfig {
    /// API key. Falls back to `FLICKR_API_KEY`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// REST endpoint (default: https://api.flickr.com/services/rest/).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub markup: MarkupStyle,
    #[serde(default)]
    pub missing_size: MissingSizePolicy,
}

impl Default for FlickrConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            request_timeout_secs: default_timeout(),
            markup: MarkupStyle::default(),
            missing_size: MissingSizePolicy::default(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl FlickrConfig {
    /// The API key from the file, else from `FLICKR_API_KEY`.
    ///
    /// Blank values count as missing.
    pub fn api_key(&self) -> Option<String> {
        resolve_api_key(self.api_key.as_deref(), std::env::var(API_KEY_ENV).ok())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn resolve_api_key(from_file: Option<&str>, from_env: Option<String>) -> Option<String> {
    from_file
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .or_else(|| from_env.filter(|k| !k.trim().is_empty()))
}

/// The `[cache]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSection {
    /// Maximum cached photo records (default: 10,000).
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
    /// Record time-to-live in seconds. Absent means records never expire.
    #[serde(default)]
    pub ttl_secs: Option<u64>,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            ttl_secs: None,
        }
    }
}

fn default_max_entries() -> u64 {
    10_000
}

impl From<&CacheSection> for CacheConfig {
    fn from(section: &CacheSection) -> Self {
        let config = CacheConfig::new().max_entries(section.max_entries);
        match section.ttl_secs {
            Some(secs) => config.ttl(Duration::from_secs(secs)),
            None => config,
        }
    }
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided; an error if missing)
    /// 2. `./_config.toml`
    /// 3. `<config dir>/flickr-tag/config.toml`
    ///
    /// Falls back to defaults when no file exists.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            FlickrError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            FlickrError::Configuration(msg) => {
                FlickrError::Configuration(format!("{msg} (in {path:?})"))
            }
            other => other,
        })
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| FlickrError::Configuration(format!("Failed to parse config: {e}")))
    }

    /// Resolve the config file path.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(FlickrError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // Site root
        let site_config = PathBuf::from("_config.toml");
        if site_config.exists() {
            return Ok(Some(site_config));
        }

        // User config
        if let Some(dir) = dirs::config_dir() {
            let user_config = dir.join("flickr-tag").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert!(config.flickr.api_key.is_none());
        assert_eq!(config.flickr.base_url, "https://api.flickr.com/services/rest/");
        assert_eq!(config.flickr.request_timeout_secs, 30);
        assert_eq!(config.flickr.markup, MarkupStyle::Holder);
        assert_eq!(config.flickr.missing_size, MissingSizePolicy::Error);
        assert_eq!(config.cache.max_entries, 10_000);
        assert!(config.cache.ttl_secs.is_none());
    }

    #[test]
    fn parse_minimal_config() {
        let config = Config::from_toml_str(
            r#"
            [flickr]
            api_key = "abc123"
        "#,
        )
        .unwrap();
        assert_eq!(config.flickr.api_key.as_deref(), Some("abc123"));
        // Defaults preserved
        assert_eq!(config.flickr.request_timeout_secs, 30);
        assert_eq!(config.cache.max_entries, 10_000);
    }

    #[test]
    fn parse_full_config() {
        let config = Config::from_toml_str(
            r#"
            [flickr]
            api_key = "abc123"
            base_url = "http://localhost:8080/rest/"
            request_timeout_secs = 5
            markup = "figure"
            missing_size = "placeholder"

            [cache]
            max_entries = 50
            ttl_secs = 600
        "#,
        )
        .unwrap();
        assert_eq!(config.flickr.base_url, "http://localhost:8080/rest/");
        assert_eq!(config.flickr.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.flickr.markup, MarkupStyle::Figure);
        assert_eq!(config.flickr.missing_size, MissingSizePolicy::Placeholder);

        let cache = CacheConfig::from(&config.cache);
        assert_eq!(cache.max_entries, 50);
        assert_eq!(cache.ttl, Some(Duration::from_secs(600)));
    }

    #[test]
    fn invalid_toml_is_configuration_error() {
        assert!(matches!(
            Config::from_toml_str("[flickr\napi_key = 1"),
            Err(FlickrError::Configuration(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[flickr]\nmarkup = \"carousel\""),
            Err(FlickrError::Configuration(_))
        ));
    }

    #[test]
    fn api_key_file_takes_precedence_over_env() {
        assert_eq!(
            resolve_api_key(Some("file"), Some("env".into())),
            Some("file".to_string())
        );
        assert_eq!(
            resolve_api_key(None, Some("env".into())),
            Some("env".to_string())
        );
        assert_eq!(
            resolve_api_key(Some("  "), Some("env".into())),
            Some("env".to_string())
        );
        assert_eq!(resolve_api_key(Some(""), Some(" ".into())), None);
        assert_eq!(resolve_api_key(None, None), None);
    }

    #[test]
    fn explicit_missing_path_is_error() {
        let result = Config::load(Some(Path::new("/nonexistent/flickr-tag.toml")));
        assert!(matches!(result, Err(FlickrError::Configuration(_))));
    }
}
