//! Target-list expansion: URLs and text files of URLs into one cleaned, deduplicated list.

use crate::url_model::{clean_url, is_alias_host};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Expands targets where any entry can be a URL or a path to a text file of URLs.
///
/// Blank entries and `#` comments are dropped, every URL is cleaned, and
/// duplicates (by cleaned form) are removed keeping the first occurrence.
pub fn read_targets(targets: &[String]) -> Vec<String> {
    let mut expanded: Vec<String> = Vec::new();
    for target in targets {
        if is_probable_file(target) {
            expanded.extend(read_urls_file(Path::new(target)));
        } else {
            expanded.push(target.clone());
        }
    }
    dedup_cleaned(expanded)
}

/// Cleans and deduplicates raw entries, preserving insertion order.
pub fn dedup_cleaned<I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut deduped = Vec::new();
    for entry in raw {
        let entry = entry.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        let cleaned = clean_url(entry);
        if seen.insert(cleaned.clone()) {
            deduped.push(cleaned);
        } else {
            tracing::debug!(url = %cleaned, "skipping duplicate target");
        }
    }
    deduped
}

/// Treats `path` as a file if it exists as a regular file, or, when it does not
/// exist, if it has no `://` and contains a path separator.
///
/// A missing path whose first component is a post host (`twitter.com/u/status/1`)
/// is a scheme-less URL, not a file.
pub fn is_probable_file(path: &str) -> bool {
    let p = Path::new(path);
    if p.exists() {
        return p.is_file();
    }
    if path.contains("://") {
        return false;
    }
    let first = path.split(['/', '\\']).next().unwrap_or_default();
    if is_alias_host(first) {
        return false;
    }
    path.contains('/') || path.contains('\\')
}

/// Reads URLs line-by-line, skipping blank lines and `#` comments.
///
/// A read failure is reported on stderr and yields no URLs; the rest of the
/// batch still runs.
pub fn read_urls_file(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(data) => data
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect(),
        Err(e) => {
            tracing::warn!(path = %path.display(), "read urls file: {}", e);
            eprintln!("Failed to read URLs file '{}': {}", path.display(), e);
            Vec::new()
        }
    }
}
