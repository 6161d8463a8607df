use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{SortMode, Tab};

const APP_DIR: &str = "friendstui";
const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub base_url: String,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_tab")]
    pub default_tab: String,
    #[serde(default = "default_sort")]
    pub default_sort: String,
    /// Known departments; when empty the departments seen in data are used
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_tab() -> String {
    "connections".to_string()
}

fn default_sort() -> String {
    "name".to_string()
}

fn default_refresh_interval() -> u64 {
    60
}

fn default_request_timeout() -> u64 {
    10
}

impl Config {
    /// Parse and validate YAML configuration text
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(text).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            anyhow::bail!("base_url must not be empty");
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!("base_url must start with http:// or https:// (got '{}')", url);
        }
        Ok(())
    }

    /// Starting tab; unknown names fall back to Connections
    pub fn initial_tab(&self) -> Tab {
        Tab::parse(&self.default_tab).unwrap_or_else(|| {
            tracing::warn!("Unknown default_tab '{}', using Connections", self.default_tab);
            Tab::default()
        })
    }

    /// Starting sort mode; unknown names fall back to Name
    pub fn initial_sort(&self) -> SortMode {
        SortMode::parse(&self.default_sort).unwrap_or_else(|| {
            tracing::warn!("Unknown default_sort '{}', using Name", self.default_sort);
            SortMode::default()
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Bearer token, ignoring blank values
    pub fn token(&self) -> Option<String> {
        self.api_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    }
}

/// Locate the config file
///
/// Order: explicit `--config` path, `<config_dir>/friendstui/config.yaml`,
/// then `./config.yaml`.
pub fn find_config_path(cli_path: Option<&str>) -> Result<PathBuf> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(p);
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    let user_config = dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE));

    if let Some(path) = &user_config {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from(CONFIG_FILE);
    if local_config.exists() {
        return Ok(local_config);
    }

    let expected_path = user_config
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| format!("~/.config/{}/{}", APP_DIR, CONFIG_FILE));

    anyhow::bail!(
        "Config file not found. Expected locations:\n\
         1. {} (preferred)\n\
         2. ./{} (fallback)\n\
         \n\
         Use --config <path> to specify a custom location.\n\
         Minimal config:\n\
         \n\
         base_url: \"http://localhost:3000/api\"",
        expected_path,
        CONFIG_FILE
    )
}
