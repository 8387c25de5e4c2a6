//! Configuration loading for dataforseo-mcp
//!
//! Configuration is loaded from:
//! 1. `--config` flag or environment variable DATAFORSEO_CONFIG_PATH
//! 2. ~/.binks/dataforseo.toml
//! 3. Default values
//!
//! DATAFORSEO_USERNAME, DATAFORSEO_PASSWORD and DATAFORSEO_BASE_URL override
//! whatever the file says.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// DataForSEO API access
    #[serde(default)]
    pub dataforseo: DataForSeoConfig,
}

/// DataForSEO API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct DataForSeoConfig {
    /// API root, without a trailing path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API login
    #[serde(default)]
    pub username: String,
    /// API password
    #[serde(default)]
    pub password: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "https://api.dataforseo.com".to_string()
}

fn default_timeout() -> u64 {
    60
}

impl Default for DataForSeoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            username: String::new(),
            password: String::new(),
            timeout_seconds: default_timeout(),
        }
    }
}

// Keeps the password out of logs
impl std::fmt::Debug for DataForSeoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataForSeoConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl DataForSeoConfig {
    /// Whether both login and password are set
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl Config {
    /// Load configuration, optionally from an explicit file path
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let config_path = explicit_path
            .map(Path::to_path_buf)
            .or_else(Self::find_config_path);

        let mut config = match config_path {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                let content = std::fs::read_to_string(&path)?;
                Self::parse(&content)?
            }
            Some(path) => {
                tracing::info!("Config file {} not found, using defaults", path.display());
                Self::default()
            }
            None => {
                tracing::info!("No config path specified, using defaults");
                Self::default()
            }
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parse a TOML document
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment overrides (highest priority)
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(username) = lookup("DATAFORSEO_USERNAME") {
            self.dataforseo.username = username;
        }
        if let Some(password) = lookup("DATAFORSEO_PASSWORD") {
            self.dataforseo.password = password;
        }
        if let Some(base_url) = lookup("DATAFORSEO_BASE_URL") {
            self.dataforseo.base_url = base_url;
        }
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        let base = url::Url::parse(&self.dataforseo.base_url)
            .map_err(|e| anyhow!("invalid base_url '{}': {}", self.dataforseo.base_url, e))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(anyhow!("base_url must be http(s), got '{}'", base.scheme()));
        }
        if self.dataforseo.timeout_seconds == 0 {
            return Err(anyhow!("timeout_seconds must be greater than zero"));
        }
        if !self.dataforseo.has_credentials() {
            tracing::warn!(
                "DataForSEO credentials are not set; requests will be rejected by the API"
            );
        }
        Ok(())
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("DATAFORSEO_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home).join(".binks").join("dataforseo.toml"));
        }

        None
    }
}
