//! # Dashboard Configuration
//!
//! Configuration management for the catalog dashboard.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CATALOG_API_URL=http://localhost:3000                              │
//! │     CATALOG_PAGE_SIZE=25                                               │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/catalog-dashboard/dashboard.toml (Linux)                 │
//! │     ~/Library/Application Support/com.catalog.dashboard/... (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     public demo API, 15s timeout, 10 per page, GH¢                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # dashboard.toml
//! [api]
//! base_url = "https://mock-data-josw.onrender.com"
//! timeout_secs = 15
//!
//! [catalog]
//! page_size = 10
//!
//! [display]
//! currency_symbol = "GH¢"
//! currency_decimals = 2
//!
//! [storage]
//! favorites_path = "/home/me/.local/share/catalog-dashboard/favorites.json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use catalog_client::{ClientConfig, DEFAULT_BASE_URL};
use catalog_core::validation::validate_page_size;
use catalog_core::{Money, DEFAULT_PAGE_SIZE};

const CONFIG_FILE: &str = "dashboard.toml";
const FAVORITES_FILE: &str = "favorites.json";

// =============================================================================
// Config Error
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("No config path available")]
    NoConfigPath,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// API Settings
// =============================================================================

/// Where the product API lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (seconds).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// =============================================================================
// Catalog Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Initial page size of the product table.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            page_size: default_page_size(),
        }
    }
}

// =============================================================================
// Display Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default = "default_currency_decimals")]
    pub currency_decimals: u8,
}

fn default_currency_symbol() -> String {
    "GH¢".to_string()
}

fn default_currency_decimals() -> u8 {
    2
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: default_currency_symbol(),
            currency_decimals: default_currency_decimals(),
        }
    }
}

// =============================================================================
// Storage Settings
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Favorites file. Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorites_path: Option<PathBuf>,
}

// =============================================================================
// Dashboard Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub storage: StorageSettings,
}

impl DashboardConfig {
    /// Loads configuration: defaults, then the TOML file (if present), then
    /// environment overrides, then validation.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading dashboard config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Like [`load`](Self::load), but falls back to defaults on any error.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load dashboard config, using defaults");
            Self::default()
        })
    }

    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Dashboard config saved");
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let url = url::Url::parse(&self.api.base_url).map_err(|e| {
            ConfigError::Invalid(format!("api.base_url '{}': {}", self.api.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "api.base_url must start with http:// or https://, got: {}",
                self.api.base_url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "api.timeout_secs must be greater than 0".into(),
            ));
        }

        validate_page_size(self.catalog.page_size)
            .map_err(|e| ConfigError::Invalid(format!("catalog.{}", e)))?;

        if self.display.currency_decimals > 4 {
            return Err(ConfigError::Invalid(
                "display.currency_decimals must be at most 4".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `CATALOG_*` overrides from any key lookup. Unparseable
    /// numeric values are ignored with a warning.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("CATALOG_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Some(timeout) = lookup("CATALOG_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "Ignoring invalid CATALOG_TIMEOUT_SECS"),
            }
        }

        if let Some(size) = lookup("CATALOG_PAGE_SIZE") {
            match size.parse::<usize>() {
                Ok(n) => {
                    debug!(page_size = n, "Overriding page size from environment");
                    self.catalog.page_size = n;
                }
                Err(_) => warn!(value = %size, "Ignoring invalid CATALOG_PAGE_SIZE"),
            }
        }

        if let Some(path) = lookup("CATALOG_FAVORITES_PATH") {
            self.storage.favorites_path = Some(PathBuf::from(path));
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// HTTP client settings derived from `[api]`.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api.base_url.clone())
            .timeout(Duration::from_secs(self.api.timeout_secs))
    }

    /// Configured favorites file, or the platform default.
    pub fn favorites_path(&self) -> Option<PathBuf> {
        self.storage
            .favorites_path
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().join(FAVORITES_FILE)))
    }

    /// Formats a price for display, e.g. `GH¢29.99`.
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{:.*}",
            self.display.currency_symbol,
            usize::from(self.display.currency_decimals),
            amount.to_major()
        )
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "catalog", "dashboard")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.api.base_url, "https://mock-data-josw.onrender.com");
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.catalog.page_size, 10);
        assert_eq!(config.display.currency_symbol, "GH¢");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: DashboardConfig = toml::from_str(
            r#"
            [api]
            base_url = "http://localhost:3000"

            [catalog]
            page_size = 25
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.catalog.page_size, 25);
        assert_eq!(config.display.currency_decimals, 2);
        assert!(config.storage.favorites_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let vars = env(&[
            ("CATALOG_API_URL", "http://127.0.0.1:9000"),
            ("CATALOG_TIMEOUT_SECS", "3"),
            ("CATALOG_PAGE_SIZE", "50"),
            ("CATALOG_FAVORITES_PATH", "/tmp/favs.json"),
        ]);
        let mut config = DashboardConfig::default();
        config.apply_overrides(|k| vars.get(k).cloned());

        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.catalog.page_size, 50);
        assert_eq!(
            config.storage.favorites_path,
            Some(PathBuf::from("/tmp/favs.json"))
        );
    }

    #[test]
    fn test_invalid_numeric_override_ignored() {
        let vars = env(&[("CATALOG_PAGE_SIZE", "lots")]);
        let mut config = DashboardConfig::default();
        config.apply_overrides(|k| vars.get(k).cloned());
        assert_eq!(config.catalog.page_size, 10);
    }

    #[test]
    fn test_config_validation() {
        let mut config = DashboardConfig::default();

        config.api.base_url = "ws://example.com".into();
        assert!(config.validate().is_err());

        config.api.base_url = "not a url".into();
        assert!(config.validate().is_err());

        config.api.base_url = "http://localhost:3000".into();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());

        config.api.timeout_secs = 5;
        config.catalog.page_size = 0;
        assert!(config.validate().is_err());

        config.catalog.page_size = 101;
        assert!(config.validate().is_err());

        config.catalog.page_size = 100;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dashboard.toml");

        let mut config = DashboardConfig::default();
        config.api.base_url = "http://localhost:3000".into();
        config.display.currency_symbol = "$".into();
        config.save(Some(path.clone())).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("[api]"));
        assert!(text.contains("[display]"));

        let loaded: DashboardConfig = toml::from_str(&text).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.toml");
        std::fs::write(&path, "[api\nbase_url = ").unwrap();

        assert!(matches!(
            DashboardConfig::load(Some(path.clone())),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(
            DashboardConfig::load_or_default(Some(path)).catalog.page_size,
            10
        );
    }

    #[test]
    fn test_format_currency() {
        let config = DashboardConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(2999)), "GH¢29.99");
        assert_eq!(config.format_currency(Money::from_cents(500)), "GH¢5.00");

        let mut whole = DashboardConfig::default();
        whole.display.currency_decimals = 0;
        assert_eq!(whole.format_currency(Money::from_cents(1200)), "GH¢12");
    }

    #[test]
    fn test_client_config_from_settings() {
        let mut config = DashboardConfig::default();
        config.api.timeout_secs = 7;
        let client = config.client_config();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.timeout, Duration::from_secs(7));
    }
}
