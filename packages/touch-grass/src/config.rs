use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::services::places::DEFAULT_PLACES_ROOT;

/// Config file read from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "touch_grass.config.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // Places API key; the config file spells it `apiKey`
    #[serde(alias = "apiKey")]
    pub places_api_key: String,

    #[serde(default = "default_places_api_root", alias = "placesRoot")]
    pub places_api_root: String,

    // Directory holding index.html
    #[serde(default = "default_client_dir", alias = "clientDir")]
    pub client_dir: String,

    // Directory holding the bundled bundle.js and main.css
    #[serde(default = "default_bundle_dir", alias = "bundleDir")]
    pub bundle_dir: String,

    #[serde(default = "default_upstream_timeout_secs", alias = "upstreamTimeoutSecs")]
    pub upstream_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load from the JSON config file if one exists (`TOUCH_GRASS_CONFIG`
    /// overrides its path), otherwise from the environment.
    pub fn load() -> Result<Self> {
        let path = std::env::var("TOUCH_GRASS_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        if Path::new(&path).exists() {
            tracing::info!("Loading configuration from {}", path);
            Self::from_file(&path)
        } else {
            Self::from_env().context("Failed to load configuration from environment")
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            places_api_key: String::new(), // Must be provided via file or environment
            places_api_root: default_places_api_root(),
            client_dir: default_client_dir(),
            bundle_dir: default_bundle_dir(),
            upstream_timeout_secs: default_upstream_timeout_secs(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_places_api_root() -> String {
    DEFAULT_PLACES_ROOT.to_string()
}

fn default_client_dir() -> String {
    "client".to_string()
}

fn default_bundle_dir() -> String {
    "dist".to_string()
}

fn default_upstream_timeout_secs() -> u64 {
    10
}
