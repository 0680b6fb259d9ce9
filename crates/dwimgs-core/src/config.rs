use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/dwimgs/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DwimgsConfig {
    /// Follow HTTP redirects when fetching an image.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
    /// Maximum number of redirects followed per URL.
    #[serde(default = "default_max_redirections")]
    pub max_redirections: u32,
    /// Connect timeout in seconds (None = wait indefinitely).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout in seconds (None = wait indefinitely).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Optional `User-Agent` header; libcurl sends none by default.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_follow_redirects() -> bool {
    true
}

fn default_max_redirections() -> u32 {
    10
}

impl Default for DwimgsConfig {
    fn default() -> Self {
        Self {
            follow_redirects: default_follow_redirects(),
            max_redirections: default_max_redirections(),
            connect_timeout_secs: None,
            timeout_secs: None,
            user_agent: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dwimgs")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DwimgsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DwimgsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DwimgsConfig = toml::from_str(&data)?;
    Ok(cfg)
}
