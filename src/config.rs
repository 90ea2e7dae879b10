//! Configuration management with TOML and environment variable layering.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Production endpoint of the Reevoo Cloud API.
pub const DEFAULT_BASE_URL: &str = "https://api.reevoocloud.com";

/// Client configuration with layered loading.
///
/// Credentials are the key and secret issued with a Reevoo account. They are
/// sent as HTTP basic auth on every request, so they normally belong in a
/// config file or the environment rather than in source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API key issued by Reevoo
    #[serde(default)]
    pub api_key: String,

    /// API secret paired with the key
    #[serde(default)]
    pub api_secret: String,

    /// Base URL of the API (override for staging or test servers)
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration from explicit credentials.
    pub fn with_keys(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: default_base_url(),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("reevoo.toml");
        if local_config.exists() {
            debug!("Found reevoo.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("reevoo").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(key) = std::env::var("REEVOO_API_KEY") {
            self.api_key = key;
        }

        if let Ok(secret) = std::env::var("REEVOO_API_SECRET") {
            self.api_secret = secret;
        }

        if let Ok(url) = std::env::var("REEVOO_BASE_URL") {
            self.base_url = url;
        }

        self
    }
}
