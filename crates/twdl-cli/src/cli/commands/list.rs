//! `twdl list <targets>...` – show the cleaned target list.

use anyhow::Result;
use twdl_core::targets;

use super::EXIT_NO_URLS;

pub fn run_list(raw: &[String]) -> Result<i32> {
    let urls = targets::read_targets(raw);
    if urls.is_empty() {
        eprintln!("No URLs to process.");
        return Ok(EXIT_NO_URLS);
    }
    for url in &urls {
        println!("{url}");
    }
    tracing::info!("listed {} target(s)", urls.len());
    Ok(0)
}
