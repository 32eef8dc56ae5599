use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_markup_extensions() -> Vec<String> {
    vec!["html".to_string(), "htm".to_string()]
}

/// Global configuration loaded from `~/.config/sitemirror/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// User-Agent sent with every GET (None = libcurl default).
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum redirects followed per GET.
    pub max_redirections: u32,
    /// Filename extensions whose content is parsed and link-rewritten.
    #[serde(default = "default_markup_extensions")]
    pub markup_extensions: Vec<String>,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            user_agent: None,
            connect_timeout_secs: 30,
            timeout_secs: 300,
            max_redirections: 10,
            markup_extensions: default_markup_extensions(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitemirror")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MirrorConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MirrorConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MirrorConfig =
        toml::from_str(&data).with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}
