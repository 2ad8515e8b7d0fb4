//! Command-line construction for the primary (yt-dlp) and fallback (gallery-dl) tools.

use crate::config::TwdlConfig;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Format preference when video and audio can be merged (ffmpeg present).
pub const FORMAT_MERGED: &str = "bestvideo+bestaudio/best";
/// Single-file format preference.
pub const FORMAT_SINGLE: &str = "best";

/// How the merge-audio setting was decided for this batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeDecision {
    /// `--no-merge-audio` was given.
    DisabledByUser,
    /// ffmpeg was found; merge best video and audio.
    Merge,
    /// ffmpeg missing; fall back to the single best format.
    NoFfmpeg,
}

impl MergeDecision {
    pub fn resolve(no_merge_audio: bool, ffmpeg_available: bool) -> Self {
        if no_merge_audio {
            MergeDecision::DisabledByUser
        } else if ffmpeg_available {
            MergeDecision::Merge
        } else {
            MergeDecision::NoFfmpeg
        }
    }

    pub fn merge_audio(self) -> bool {
        self == MergeDecision::Merge
    }

    /// Lines printed before the batch starts.
    pub fn messages(self) -> &'static [&'static str] {
        match self {
            MergeDecision::DisabledByUser => &["Info: Audio/video merging disabled by user."],
            MergeDecision::Merge => {
                &["Info: ffmpeg detected. Will merge best video+audio for optimal quality."]
            }
            MergeDecision::NoFfmpeg => &[
                "Warning: ffmpeg not found. Audio/video merging disabled. Install ffmpeg for best quality.",
                "  Install with: sudo apt install ffmpeg",
            ],
        }
    }
}

/// Per-batch options shared by every primary and fallback invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOptions {
    pub output_dir: PathBuf,
    /// Output template file-name part, joined onto `output_dir`.
    pub output_template: String,
    pub merge_audio: bool,
    pub cookies: Option<PathBuf>,
    pub write_info_json: bool,
    pub write_thumbnail: bool,
    pub keep_fragments: bool,
    pub retries: u32,
    pub fragment_retries: u32,
}

impl DownloadOptions {
    /// Options taken from config; callers apply CLI overrides afterwards.
    pub fn from_config(cfg: &TwdlConfig, output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            output_template: cfg.output_template.clone(),
            merge_audio: true,
            cookies: cfg.cookies.clone(),
            write_info_json: cfg.write_info_json,
            write_thumbnail: cfg.write_thumbnail,
            keep_fragments: cfg.keep_fragments,
            retries: cfg.retries,
            fragment_retries: cfg.fragment_retries,
        }
    }

    pub fn format(&self) -> &'static str {
        if self.merge_audio {
            FORMAT_MERGED
        } else {
            FORMAT_SINGLE
        }
    }

    /// Full `--output` template path.
    pub fn output_template_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_template)
    }

    /// Arguments for yt-dlp (everything after the program name).
    pub fn primary_args(&self, url: &str) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "--format".into(),
            self.format().into(),
            "--output".into(),
            self.output_template_path().into_os_string(),
            "--retries".into(),
            self.retries.to_string().into(),
            "--fragment-retries".into(),
            self.fragment_retries.to_string().into(),
            "--skip-unavailable-fragments".into(),
        ];
        if self.write_info_json {
            args.push("--write-info-json".into());
        }
        if self.write_thumbnail {
            args.push("--write-thumbnail".into());
        }
        if self.keep_fragments {
            args.push("--keep-fragments".into());
        }
        push_cookies(&mut args, self.cookies.as_deref());
        args.push(url.into());
        args
    }

    /// Arguments for gallery-dl (everything after the program name).
    pub fn fallback_args(&self, url: &str) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "--destination".into(),
            self.output_dir.clone().into_os_string(),
        ];
        push_cookies(&mut args, self.cookies.as_deref());
        args.push(url.into());
        args
    }
}

fn push_cookies(args: &mut Vec<OsString>, cookies: Option<&Path>) {
    if let Some(path) = cookies {
        args.push("--cookies".into());
        args.push(path.as_os_str().to_os_string());
    }
}
