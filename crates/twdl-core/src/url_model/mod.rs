//! URL cleaning for post URLs.
//!
//! Rewrites every known Twitter/X host alias to `x.com`, strips the query
//! string and fragment, and drops a trailing slash. The cleaned form is the
//! dedup key for the target list.

mod alias;
mod status;

pub use alias::{is_alias_host, CANONICAL_HOST};
pub use status::status_id;

use url::Url;

/// Normalizes a raw target into its cleaned form.
///
/// Strings that are not absolute `http`/`https` URLs (and do not start with a
/// known alias host) are returned trimmed but otherwise unchanged, so the
/// external tool still gets a chance to interpret them.
///
/// # Examples
///
/// - `clean_url("https://twitter.com/u/status/1?s=20")` → `"https://x.com/u/status/1"`
/// - `clean_url("vxtwitter.com/u/status/1/")` → `"https://x.com/u/status/1"`
pub fn clean_url(raw: &str) -> String {
    let trimmed = raw.trim();

    let parsed = match Url::parse(trimmed) {
        Ok(u) => Some(u),
        Err(_) if starts_with_alias_host(trimmed) => Url::parse(&format!("https://{trimmed}")).ok(),
        Err(_) => None,
    };

    let Some(mut url) = parsed else {
        return trimmed.to_string();
    };
    if url.scheme() != "http" && url.scheme() != "https" {
        return trimmed.to_string();
    }

    if url.host_str().is_some_and(is_alias_host) {
        if url.set_host(Some(CANONICAL_HOST)).is_err() || url.set_scheme("https").is_err() {
            return trimmed.to_string();
        }
    }

    url.set_query(None);
    url.set_fragment(None);

    if url.path().len() > 1 {
        if let Some(without) = url.path().strip_suffix('/').map(str::to_string) {
            url.set_path(&without);
        }
    }

    url.to_string()
}

/// True for scheme-less input like `twitter.com/user/status/1`.
fn starts_with_alias_host(s: &str) -> bool {
    if s.contains("://") {
        return false;
    }
    let host = s.split('/').next().unwrap_or_default();
    !host.is_empty() && is_alias_host(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_rewrite_to_x() {
        assert_eq!(
            clean_url("https://twitter.com/user/status/123"),
            "https://x.com/user/status/123"
        );
        assert_eq!(
            clean_url("http://mobile.twitter.com/user/status/123"),
            "https://x.com/user/status/123"
        );
        assert_eq!(
            clean_url("https://www.fxtwitter.com/user/status/123"),
            "https://x.com/user/status/123"
        );
        assert_eq!(
            clean_url("https://X.com/user/status/123"),
            "https://x.com/user/status/123"
        );
    }

    #[test]
    fn strips_query_fragment_and_trailing_slash() {
        assert_eq!(
            clean_url("https://x.com/user/status/123?s=20&t=abc#m"),
            "https://x.com/user/status/123"
        );
        assert_eq!(
            clean_url("https://x.com/user/status/123/"),
            "https://x.com/user/status/123"
        );
        assert_eq!(
            clean_url("https://x.com/user/status/123//"),
            "https://x.com/user/status/123/"
        );
        assert_eq!(clean_url("https://x.com/"), "https://x.com/");
    }

    #[test]
    fn other_hosts_keep_host_but_lose_query() {
        assert_eq!(
            clean_url("https://example.com/post/9?ref=feed"),
            "https://example.com/post/9"
        );
        assert_eq!(
            clean_url("http://example.com/post/9"),
            "http://example.com/post/9"
        );
    }

    #[test]
    fn scheme_less_alias_host() {
        assert_eq!(
            clean_url("twitter.com/user/status/5"),
            "https://x.com/user/status/5"
        );
        assert_eq!(
            clean_url("  www.x.com/user/status/5?s=1  "),
            "https://x.com/user/status/5"
        );
    }

    #[test]
    fn non_urls_are_only_trimmed() {
        assert_eq!(clean_url("  not a url "), "not a url");
        assert_eq!(clean_url("ftp://x.com/file"), "ftp://x.com/file");
        assert_eq!(clean_url("example.com/a"), "example.com/a");
    }

    #[test]
    fn equivalent_inputs_share_cleaned_form() {
        let a = clean_url("https://twitter.com/u/status/7?s=20");
        let b = clean_url("https://x.com/u/status/7");
        let c = clean_url("vxtwitter.com/u/status/7/");
        assert_eq!(a, b);
        assert_eq!(b, c);
    }
}
