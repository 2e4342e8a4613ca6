//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Listings page and extraction rules
    #[serde(default)]
    pub source: SourceConfig,

    /// Messaging API settings
    #[serde(default)]
    pub notifier: NotifierConfig,

    /// Seen-set persistence
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No config file at {:?}, using defaults", path);
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("Config load failed from {:?}: {}. Using defaults.", path, e);
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.source.url.trim().is_empty() {
            return Err(AppError::validation("source.url is empty"));
        }
        Url::parse(&self.source.url)
            .map_err(|e| AppError::validation(format!("source.url is invalid: {e}")))?;
        if self.source.origin.trim().is_empty() {
            return Err(AppError::validation("source.origin is empty"));
        }
        if self.source.origin.ends_with('/') {
            return Err(AppError::validation(
                "source.origin must not end with '/'",
            ));
        }
        if self.source.keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(AppError::validation("No keywords defined"));
        }
        if self.source.user_agent.trim().is_empty() {
            return Err(AppError::validation("source.user_agent is empty"));
        }
        if self.source.timeout_secs == 0 {
            return Err(AppError::validation("source.timeout_secs must be > 0"));
        }
        Url::parse(&self.notifier.api_base)
            .map_err(|e| AppError::validation(format!("notifier.api_base is invalid: {e}")))?;
        if self.notifier.timeout_secs == 0 {
            return Err(AppError::validation("notifier.timeout_secs must be > 0"));
        }
        if self.notifier.message_template.trim().is_empty() {
            return Err(AppError::validation("notifier.message_template is empty"));
        }
        if self.storage.seen_file.as_os_str().is_empty() {
            return Err(AppError::validation("storage.seen_file is empty"));
        }
        Ok(())
    }
}

/// Listings page location and the keyword heuristic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Listings page to fetch
    #[serde(default = "defaults::source_url")]
    pub url: String,

    /// Origin prefixed to root-relative hrefs
    #[serde(default = "defaults::origin")]
    pub origin: String,

    /// Case-insensitive terms marking listing/IPO links
    #[serde(default = "defaults::keywords")]
    pub keywords: Vec<String>,

    /// GET timeout in seconds
    #[serde(default = "defaults::fetch_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header for the page request
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: defaults::source_url(),
            origin: defaults::origin(),
            keywords: defaults::keywords(),
            timeout_secs: defaults::fetch_timeout(),
            user_agent: defaults::user_agent(),
        }
    }
}

/// Messaging API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Bot API base URL, without trailing slash
    #[serde(default = "defaults::api_base")]
    pub api_base: String,

    /// POST timeout in seconds
    #[serde(default = "defaults::send_timeout")]
    pub timeout_secs: u64,

    /// Text formatting mode passed as `parse_mode`
    #[serde(default = "defaults::parse_mode")]
    pub parse_mode: String,

    /// Message body; `{label}` and `{link}` are substituted
    #[serde(default = "defaults::message_template")]
    pub message_template: String,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            api_base: defaults::api_base(),
            timeout_secs: defaults::send_timeout(),
            parse_mode: defaults::parse_mode(),
            message_template: defaults::message_template(),
        }
    }
}

/// Seen-set persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Line-delimited file of already notified identifiers
    #[serde(default = "defaults::seen_file")]
    pub seen_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            seen_file: defaults::seen_file(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // Source defaults
    pub fn source_url() -> String {
        "https://www.idx.co.id/id/perusahaan-tercatat/aktivitas-pencatatan".into()
    }
    pub fn origin() -> String {
        "https://www.idx.co.id".into()
    }
    pub fn keywords() -> Vec<String> {
        vec!["pencatatan".into(), "listing".into(), "ipo".into()]
    }
    pub fn fetch_timeout() -> u64 {
        20
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; listing-watcher/0.1)".into()
    }

    // Notifier defaults
    pub fn api_base() -> String {
        "https://api.telegram.org".into()
    }
    pub fn send_timeout() -> u64 {
        10
    }
    pub fn parse_mode() -> String {
        "Markdown".into()
    }
    pub fn message_template() -> String {
        "📣 *IPO / Pencatatan Baru Ditemukan*\n{label}\n{link}".into()
    }

    // Storage defaults
    pub fn seen_file() -> PathBuf {
        PathBuf::from("seen_links.txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn defaults_match_listing_page() {
        let config = Config::default();
        assert_eq!(config.source.origin, "https://www.idx.co.id");
        assert_eq!(config.source.keywords, vec!["pencatatan", "listing", "ipo"]);
        assert_eq!(config.source.timeout_secs, 20);
        assert_eq!(config.notifier.timeout_secs, 10);
        assert_eq!(config.notifier.parse_mode, "Markdown");
        assert_eq!(config.storage.seen_file, PathBuf::from("seen_links.txt"));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [source]
            keywords = ["saham"]

            [storage]
            seen_file = "state/seen.txt"
            "#,
        )
        .unwrap();
        assert_eq!(config.source.keywords, vec!["saham"]);
        assert_eq!(config.source.origin, "https://www.idx.co.id");
        assert_eq!(config.storage.seen_file, PathBuf::from("state/seen.txt"));
        assert_eq!(config.notifier.api_base, "https://api.telegram.org");
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.source.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_keywords() {
        let mut config = Config::default();
        config.source.keywords = vec!["  ".into()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_trailing_slash_origin() {
        let mut config = Config::default();
        config.source.origin = "https://www.idx.co.id/".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_api_base() {
        let mut config = Config::default();
        config.notifier.api_base = "not a url".into();
        let err = config.validate().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let config = Config::load_or_default("/definitely/not/here.toml");
        assert_eq!(config.source.url, defaults::source_url());
    }

    #[test]
    fn load_reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watcher.toml");
        std::fs::write(&path, "[notifier]\nparse_mode = \"HTML\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.notifier.parse_mode, "HTML");
    }
}
