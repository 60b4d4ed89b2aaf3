use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::display::{DisplayOptions, DEFAULT_DATE_FORMAT, DEFAULT_SOURCE_SUFFIX};
use crate::fetch::FetchOptions;

/// Card formatting (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// chrono strftime pattern for item and site dates (UTC).
    pub date_format: String,
    /// Appended to an item's slug to build its source link when `location` is missing.
    pub source_suffix: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            source_suffix: DEFAULT_SOURCE_SUFFIX.to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/sitelens/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteLensConfig {
    /// Seconds allowed for establishing the connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole descriptor transfer.
    pub timeout_secs: u64,
    /// Maximum redirects followed before giving up.
    pub max_redirections: u32,
    /// Optional User-Agent header; libcurl sends none by default.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Optional display section; if missing, built-in defaults are used.
    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

impl Default for SiteLensConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            max_redirections: 10,
            user_agent: None,
            display: None,
        }
    }
}

impl SiteLensConfig {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            max_redirections: self.max_redirections,
            user_agent: self.user_agent.clone(),
            abort: None,
        }
    }

    pub fn display_options(&self) -> DisplayOptions {
        let display = self.display.clone().unwrap_or_default();
        DisplayOptions {
            date_format: display.date_format,
            source_suffix: display.source_suffix,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitelens")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SiteLensConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SiteLensConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file (e.g. `--config`).
pub fn load_from(path: &Path) -> Result<SiteLensConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: SiteLensConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
