// ABOUTME: Client configuration loaded from ~/.hireinminutes/config.toml
// ABOUTME: Falls back to defaults when the file is missing; env vars override the file

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{HireError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub api_base_url: String,
    /// Jobs requested per listing page.
    pub page_size: u32,
    /// Quiet period before a filter change triggers a fetch.
    pub debounce_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            page_size: 10,
            debounce_ms: 500,
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Loads `~/.hireinminutes/config.toml` (if present) and applies env overrides.
    pub fn load() -> Result<Self> {
        let mut config = match Self::path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| HireError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| HireError::Config(format!("invalid config at {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".hireinminutes").join("config.toml"))
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup("HIM_API_URL") {
            self.api_base_url = url;
        }
        if let Some(size) = lookup("HIM_PAGE_SIZE") {
            self.page_size = size
                .parse()
                .map_err(|_| HireError::Config(format!("HIM_PAGE_SIZE '{}' is not a number", size)))?;
        }
        if let Some(ms) = lookup("HIM_DEBOUNCE_MS") {
            self.debounce_ms = ms
                .parse()
                .map_err(|_| HireError::Config(format!("HIM_DEBOUNCE_MS '{}' is not a number", ms)))?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(HireError::Config("api-base-url must not be empty".to_string()));
        }
        if self.page_size == 0 {
            return Err(HireError::Config("page-size must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
