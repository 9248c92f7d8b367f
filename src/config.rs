//! Configuration handling for the TUI

use crate::lookup::DEFAULT_COUNTRIES_URL;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the country list endpoint
pub const COUNTRIES_URL_ENV: &str = "ONBOARD_COUNTRIES_URL";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Country list endpoint
    pub countries_url: Option<String>,
    /// Request timeout for the country lookup, in seconds
    pub request_timeout_secs: Option<u64>,
    /// Hide the splash as soon as startup finishes
    pub skip_splash: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "onboard", "onboard-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded config");
                config
            }
            _ => Self::default(),
        };

        if let Ok(url) = std::env::var(COUNTRIES_URL_ENV) {
            config.countries_url = Some(url);
        }

        Ok(config)
    }

    pub fn countries_url(&self) -> &str {
        self.countries_url.as_deref().unwrap_or(DEFAULT_COUNTRIES_URL)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    pub fn skip_splash(&self) -> bool {
        self.skip_splash.unwrap_or(false)
    }
}
