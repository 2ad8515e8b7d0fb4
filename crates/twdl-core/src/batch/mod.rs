//! Sequential batch loop: one primary invocation per URL, fallback on a known
//! failure signature, and an aggregate report.

mod report;
mod runner;

pub use report::{BatchReport, FailedItem, ItemResult};
pub use runner::{ProcessRunner, ToolRunner};

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use crate::config::FallbackConfig;
use crate::invocation::DownloadOptions;
use crate::outcome::{self, FallbackDecision, FallbackPolicy, OutcomeKind};
use crate::tools::{ToolError, ToolPaths, YT_DLP};
use crate::url_model::status_id;

/// Resolved executables for one batch.
#[derive(Debug, Clone)]
pub struct ResolvedTools {
    pub primary: PathBuf,
    /// None when fallback is disabled or the tool was not found.
    pub fallback: Option<PathBuf>,
    /// `PATH` passed to every child process.
    pub env_path: OsString,
}

impl ResolvedTools {
    /// Locates yt-dlp (required) and the fallback tool (optional).
    pub fn resolve(
        paths: &ToolPaths,
        fallback: &FallbackConfig,
        fallback_enabled: bool,
    ) -> Result<Self, ToolError> {
        let primary = paths.find(YT_DLP)?;
        let fallback = if fallback_enabled && fallback.enabled {
            match paths.find(&fallback.tool) {
                Ok(p) => Some(p),
                Err(e) => {
                    tracing::warn!("fallback disabled: {}", e);
                    None
                }
            }
        } else {
            None
        };
        tracing::debug!(primary = %primary.display(), fallback = ?fallback, "resolved tools");
        Ok(Self {
            primary,
            fallback,
            env_path: paths.search_path().clone(),
        })
    }
}

/// Runs the download loop over a cleaned URL list.
pub struct BatchDownloader<R: ToolRunner> {
    runner: R,
    tools: ResolvedTools,
    options: DownloadOptions,
    signatures: Vec<String>,
    policy: FallbackPolicy,
}

impl<R: ToolRunner> BatchDownloader<R> {
    pub fn new(
        runner: R,
        tools: ResolvedTools,
        options: DownloadOptions,
        fallback: &FallbackConfig,
    ) -> Self {
        let policy = FallbackPolicy {
            enabled: fallback.enabled,
            available: tools.fallback.is_some(),
        };
        Self {
            runner,
            tools,
            options,
            signatures: fallback.signatures.clone(),
            policy,
        }
    }

    /// Downloads every URL in order. Only output-directory setup is fatal;
    /// per-URL failures end up in the report.
    pub fn run(&self, urls: &[String]) -> Result<BatchReport> {
        fs::create_dir_all(&self.options.output_dir).with_context(|| {
            format!(
                "create output directory {}",
                self.options.output_dir.display()
            )
        })?;

        let mut report = BatchReport::new(urls.len());
        for url in urls {
            let result = self.download_one(url);
            match &result {
                ItemResult::Failed { reason } => {
                    tracing::warn!(url = %url, status = ?status_id(url), "download failed: {}", reason)
                }
                ok => tracing::info!(url = %url, status = ?status_id(url), result = ?ok, "downloaded"),
            }
            report.record(url, result);
        }
        Ok(report)
    }

    /// Primary tool, then the fallback tool if the primary reported no video.
    pub fn download_one(&self, url: &str) -> ItemResult {
        println!("\n=== Downloading: {}", url);
        let args = self.options.primary_args(url);
        let outcome = match self
            .runner
            .run(&self.tools.primary, &args, &self.tools.env_path)
        {
            Ok(o) => o,
            Err(e) => {
                eprintln!("Unexpected error invoking {} for {}: {}", YT_DLP, url, e);
                return ItemResult::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let kind = outcome::classify(&outcome, &self.signatures);
        if kind == OutcomeKind::Success {
            return ItemResult::Primary;
        }

        if let (FallbackDecision::Fallback, Some(fallback)) =
            (self.policy.decide(kind), self.tools.fallback.as_ref())
        {
            let name = runner::tool_name(fallback);
            println!("--- No video found, trying {}: {}", name, url);
            let args = self.options.fallback_args(url);
            return match self.runner.run(fallback, &args, &self.tools.env_path) {
                Ok(o) if o.is_success() => ItemResult::Fallback,
                Ok(o) => {
                    let reason = describe_exit(&name, o.exit_code);
                    eprintln!("Fallback failed ({}) for {}", reason, url);
                    ItemResult::Failed { reason }
                }
                Err(e) => {
                    eprintln!("Unexpected error invoking {} for {}: {}", name, url, e);
                    ItemResult::Failed {
                        reason: e.to_string(),
                    }
                }
            };
        }

        match outcome.exit_code {
            Some(code) => eprintln!("Download failed with code {} for {}", code, url),
            None => eprintln!("Download terminated by signal for {}", url),
        }
        let reason = describe_exit(YT_DLP, outcome.exit_code);
        ItemResult::Failed { reason }
    }
}

fn describe_exit(tool: &str, code: Option<i32>) -> String {
    match code {
        Some(c) => format!("{} exited with code {}", tool, c),
        None => format!("{} terminated by signal", tool),
    }
}
