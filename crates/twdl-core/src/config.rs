use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default `yt-dlp` output template (file-name part; joined onto the output dir).
pub const DEFAULT_OUTPUT_TEMPLATE: &str = "%(title).200B.%(ext)s";

/// stderr text `yt-dlp` prints for image-only posts.
pub const NO_VIDEO_SIGNATURE: &str = "No video could be found in this tweet";

/// Fallback tool settings (optional `[fallback]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Run the fallback tool when the primary tool reports a known signature.
    pub enabled: bool,
    /// Fallback executable name (looked up in the local bin dir, then PATH).
    pub tool: String,
    /// stderr substrings (case-insensitive) that trigger the fallback.
    pub signatures: Vec<String>,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tool: "gallery-dl".to_string(),
            signatures: vec![NO_VIDEO_SIGNATURE.to_string()],
        }
    }
}

/// Global configuration loaded from `~/.config/twdl/config.toml`.
/// Missing keys take their built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwdlConfig {
    /// Output directory; None = `$HOME/twitter_images`.
    pub output_dir: Option<PathBuf>,
    /// cookies.txt passed to both tools when set.
    pub cookies: Option<PathBuf>,
    /// `yt-dlp` output template, relative to the output directory.
    pub output_template: String,
    /// `--retries` for yt-dlp.
    pub retries: u32,
    /// `--fragment-retries` for yt-dlp.
    pub fragment_retries: u32,
    /// Directory searched before PATH for tools; None = `<exe dir>/bin`.
    pub bin_dir: Option<PathBuf>,
    pub write_info_json: bool,
    pub write_thumbnail: bool,
    pub keep_fragments: bool,
    /// Optional fallback section; if missing, built-in defaults are used.
    pub fallback: Option<FallbackConfig>,
}

impl Default for TwdlConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            cookies: None,
            output_template: DEFAULT_OUTPUT_TEMPLATE.to_string(),
            retries: 5,
            fragment_retries: 10,
            bin_dir: None,
            write_info_json: false,
            write_thumbnail: false,
            keep_fragments: false,
            fallback: None,
        }
    }
}

impl TwdlConfig {
    /// Effective fallback settings (configured section or defaults).
    pub fn fallback(&self) -> FallbackConfig {
        self.fallback.clone().unwrap_or_default()
    }

    /// Effective output directory when none is given on the command line.
    pub fn default_output_dir(&self) -> PathBuf {
        if let Some(dir) = &self.output_dir {
            return dir.clone();
        }
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("twitter_images")
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("twdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TwdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TwdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: TwdlConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
