//! Canonical forms for hosts and paths.

const WWW_PREFIX: &str = "www.";

/// Canonical host: lowercased, no trailing `/`, always `www.`-prefixed.
/// Empty input stays empty (relative links have no host).
pub fn normalize_netloc(value: &str) -> String {
    let value = value.trim_end_matches('/');
    if value.is_empty() {
        return String::new();
    }
    let lower = value.to_ascii_lowercase();
    if lower.starts_with(WWW_PREFIX) {
        lower
    } else {
        format!("{}{}", WWW_PREFIX, lower)
    }
}

/// Canonical path: no trailing `/`. A leading `/` is kept, it separates
/// site-rooted references from document-relative ones.
pub fn normalize_path(value: &str) -> String {
    value.trim_end_matches('/').to_string()
}
