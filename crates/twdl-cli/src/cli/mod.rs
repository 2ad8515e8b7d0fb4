//! CLI for twdl.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use twdl_core::config;

use commands::{run_get, run_list, run_tools};

/// Top-level CLI for twdl.
#[derive(Debug, Parser)]
#[command(name = "twdl")]
#[command(about = "twdl: download images/videos from Twitter/X posts using yt-dlp", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Options for `twdl get`.
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Post URLs or text files containing URLs (one per line).
    #[arg(required = true, num_args = 1..)]
    pub targets: Vec<String>,

    /// Output directory (default: config `output_dir`, else ~/twitter_images).
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Path to cookies.txt for authenticated/age-restricted content.
    #[arg(long, value_name = "PATH")]
    pub cookies: Option<PathBuf>,

    /// Do not merge best video+audio; use single best format (overrides ffmpeg detection).
    #[arg(long)]
    pub no_merge_audio: bool,

    /// Write yt-dlp info JSON alongside media.
    #[arg(long)]
    pub write_info_json: bool,

    /// Write thumbnails if available.
    #[arg(long)]
    pub write_thumbnail: bool,

    /// Keep intermediate fragments (debugging).
    #[arg(long)]
    pub keep_fragments: bool,

    /// Never run the fallback image downloader.
    #[arg(long)]
    pub no_fallback: bool,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download media for the given posts.
    Get(GetArgs),

    /// Print the cleaned, deduplicated URL list without downloading.
    List {
        /// Post URLs or text files containing URLs (one per line).
        #[arg(required = true, num_args = 1..)]
        targets: Vec<String>,
    },

    /// Show where yt-dlp, gallery-dl and ffmpeg were found.
    Tools,
}

impl CliCommand {
    /// Runs the parsed command and returns the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Get(args) => run_get(&cfg, &args),
            CliCommand::List { targets } => run_list(&targets),
            CliCommand::Tools => run_tools(&cfg),
        }
    }
}

#[cfg(test)]
mod tests;
