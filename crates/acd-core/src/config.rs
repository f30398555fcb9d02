use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/acd/config.toml`.
///
/// The retry bound is fixed in [`crate::request::MAX_RETRIES`] and is not
/// part of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcdConfig {
    /// Base URL of the metadata endpoint.
    pub metadata_url: String,
    /// Base URL of the content endpoint.
    pub content_url: String,
    /// Seconds allowed to establish a connection.
    pub connect_timeout_secs: u64,
    /// Seconds without any received byte before the request counts as a read
    /// timeout. Long transfers that keep receiving data are never cut off.
    pub read_timeout_secs: u64,
    /// Optional User-Agent header (None = curl default).
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for AcdConfig {
    fn default() -> Self {
        Self {
            metadata_url: "https://cdws.us-east-1.amazonaws.com/drive/v1/".to_string(),
            content_url: "https://content-na.drive.amazonaws.com/cdproxy/".to_string(),
            connect_timeout_secs: 30,
            read_timeout_secs: 60,
            user_agent: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("acd")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AcdConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AcdConfig::default();
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

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<AcdConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: AcdConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
