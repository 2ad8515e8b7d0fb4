//! Host aliases that all serve the same posts as `x.com`.

/// Canonical host every alias is rewritten to.
pub const CANONICAL_HOST: &str = "x.com";

/// Hosts (lowercase, without `www.`) that map to [`CANONICAL_HOST`].
const ALIASES: &[&str] = &[
    "x.com",
    "twitter.com",
    "mobile.twitter.com",
    "mobile.x.com",
    "fxtwitter.com",
    "vxtwitter.com",
    "fixupx.com",
    "fixvx.com",
];

/// Returns true if `host` (any case, optional `www.` prefix) is an alias of `x.com`.
pub fn is_alias_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    ALIASES.contains(&host)
}
