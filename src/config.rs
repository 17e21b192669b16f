//! Application configuration management.
//!
//! Stored at `~/.config/laharde/config.json`. The backend URL resolves in
//! order: `LAHARDE_BACKEND_URL` environment variable, config file, built-in
//! default.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for the config directory path.
const APP_NAME: &str = "laharde";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the backend URL.
const BACKEND_URL_ENV: &str = "LAHARDE_BACKEND_URL";

/// Default backend address when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub backend_url: Option<String>,
    /// Run on the built-in demo data instead of a backend.
    #[serde(default)]
    pub demo_mode: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn backend_url(&self) -> String {
        resolve_backend_url(std::env::var(BACKEND_URL_ENV).ok(), self.backend_url.clone())
    }
}

fn resolve_backend_url(env_url: Option<String>, config_url: Option<String>) -> String {
    env_url
        .filter(|url| !url.trim().is_empty())
        .or(config_url)
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}
