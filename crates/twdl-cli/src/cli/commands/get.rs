//! `twdl get <targets>...` – download media for every cleaned target URL.

use anyhow::Result;
use twdl_core::batch::{BatchDownloader, BatchReport, ProcessRunner, ResolvedTools};
use twdl_core::config::TwdlConfig;
use twdl_core::invocation::{DownloadOptions, MergeDecision};
use twdl_core::targets;
use twdl_core::tools::{ToolError, ToolPaths};

use super::EXIT_NO_URLS;
use crate::cli::GetArgs;

/// CLI flags layered over config values.
pub(crate) fn download_options(
    cfg: &TwdlConfig,
    args: &GetArgs,
    merge: MergeDecision,
) -> DownloadOptions {
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| cfg.default_output_dir());
    let mut opts = DownloadOptions::from_config(cfg, output_dir);
    opts.merge_audio = merge.merge_audio();
    if let Some(c) = &args.cookies {
        opts.cookies = Some(c.clone());
    }
    opts.write_info_json |= args.write_info_json;
    opts.write_thumbnail |= args.write_thumbnail;
    opts.keep_fragments |= args.keep_fragments;
    opts
}

pub fn run_get(cfg: &TwdlConfig, args: &GetArgs) -> Result<i32> {
    let urls = targets::read_targets(&args.targets);
    if urls.is_empty() {
        eprintln!("No URLs to process.");
        return Ok(EXIT_NO_URLS);
    }
    tracing::info!("processing {} target(s)", urls.len());

    let paths = ToolPaths::from_config(cfg);
    let merge = MergeDecision::resolve(args.no_merge_audio, paths.ffmpeg_available());
    for line in merge.messages() {
        println!("{line}");
    }

    let options = download_options(cfg, args, merge);
    let fallback = cfg.fallback();

    let report = match ResolvedTools::resolve(&paths, &fallback, !args.no_fallback) {
        Ok(tools) => BatchDownloader::new(ProcessRunner, tools, options, &fallback).run(&urls)?,
        Err(e @ ToolError::NotFound(_)) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}.", e);
            eprintln!("Hint: install yt-dlp (pip install yt-dlp) or place it in the local bin/ directory.");
            BatchReport::fail_all(&urls, &e.to_string())
        }
        Err(e) => return Err(e.into()),
    };

    print_report(&report);
    Ok(report.exit_code())
}

fn print_report(report: &BatchReport) {
    println!("\n{}", report.summary_line());
    if !report.failed.is_empty() {
        eprintln!("Failed items:");
        for item in &report.failed {
            eprintln!("  {}  ({})", item.url, item.reason);
        }
    }
}
