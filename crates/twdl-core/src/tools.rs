//! External tool discovery (yt-dlp, gallery-dl, ffmpeg).
//!
//! Tools are looked up in a local bin directory first, then in `PATH`. The
//! same search path is handed to child processes so that an `ffmpeg` placed
//! next to a bundled `yt-dlp` is picked up for merging.

use crate::config::TwdlConfig;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const YT_DLP: &str = "yt-dlp";
pub const FFMPEG: &str = "ffmpeg";

/// Failures locating or starting an external tool.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("external '{0}' not found in PATH or local bin/")]
    NotFound(String),
    #[error("failed to start {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read {tool} output: {source}")]
    Io {
        tool: String,
        #[source]
        source: std::io::Error,
    },
}

/// Search path for tools: the local bin dir followed by the inherited `PATH`.
#[derive(Debug, Clone)]
pub struct ToolPaths {
    local_bin: Option<PathBuf>,
    search_path: OsString,
}

impl ToolPaths {
    /// Builds the search path from an optional local bin dir and the current `PATH`.
    pub fn new(local_bin: Option<PathBuf>) -> Self {
        let inherited = std::env::var_os("PATH").unwrap_or_default();
        Self::with_path(local_bin, inherited)
    }

    /// Like [`ToolPaths::new`] but with an explicit base `PATH` (tests).
    pub fn with_path(local_bin: Option<PathBuf>, base_path: OsString) -> Self {
        let mut dirs: Vec<PathBuf> = Vec::new();
        if let Some(dir) = &local_bin {
            dirs.push(dir.clone());
        }
        dirs.extend(std::env::split_paths(&base_path).filter(|p| !p.as_os_str().is_empty()));
        let search_path = std::env::join_paths(dirs).unwrap_or(base_path);
        Self {
            local_bin,
            search_path,
        }
    }

    /// Uses `bin_dir` from config, else `<exe dir>/bin`.
    pub fn from_config(cfg: &TwdlConfig) -> Self {
        let local_bin = cfg.bin_dir.clone().or_else(default_local_bin);
        Self::new(local_bin)
    }

    pub fn local_bin(&self) -> Option<&Path> {
        self.local_bin.as_deref()
    }

    /// `PATH` value for child processes.
    pub fn search_path(&self) -> &OsString {
        &self.search_path
    }

    /// Resolves `name` to an executable path.
    pub fn find(&self, name: &str) -> Result<PathBuf, ToolError> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        which::which_in(name, Some(&self.search_path), cwd)
            .map_err(|_| ToolError::NotFound(name.to_string()))
    }

    pub fn ffmpeg_available(&self) -> bool {
        self.find(FFMPEG).is_ok()
    }
}

/// `<directory of the running executable>/bin`, if it can be determined.
fn default_local_bin() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join("bin"))
}
