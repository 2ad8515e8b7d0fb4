//! Post id extraction from `/<user>/status/<id>` paths.

/// Extracts the numeric post id from a cleaned post URL.
///
/// Returns `None` if the URL cannot be parsed or has no `status/<digits>` pair.
pub fn status_id(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let mut segments = parsed.path_segments()?;
    while let Some(seg) = segments.next() {
        if seg == "status" || seg == "statuses" {
            let id = segments.next()?;
            if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
                return Some(id.to_string());
            }
            return None;
        }
    }
    None
}
