//! URL modeling: canonical host/path form, absolute vs. relative
//! classification, equality and filename inference.
//!
//! Hosts are canonicalized with a `www.` prefix and paths lose their trailing
//! separator, so `http://abc.com/qwerty/` and `http://www.abc.com/qwerty`
//! denote the same page.

mod normalize;
mod parse;
mod path;

use std::fmt;

pub use normalize::{normalize_netloc, normalize_path};
pub use path::{directory_of, filename_from_path, join_reference};

/// Schemes that denote fetchable pages. Empty covers relative and
/// scheme-relative references.
const WEB_SCHEMES: [&str; 3] = ["", "http", "https"];

/// A parsed, normalized link.
///
/// Equality compares `netloc` and `path` only: scheme, params, query and
/// fragment never participate.
#[derive(Debug, Clone)]
pub struct SiteUrl {
    scheme: String,
    netloc: String,
    path: String,
    params: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl SiteUrl {
    /// Parses and normalizes `raw`. Unparseable input yields a degenerate
    /// relative URL with empty path, which resolves against the site root.
    pub fn parse(raw: &str) -> Self {
        let parts = parse::split(raw);
        Self {
            scheme: parts.scheme.to_ascii_lowercase(),
            netloc: normalize_netloc(&parts.netloc),
            path: normalize_path(&parts.path),
            params: parts.params,
            query: parts.query,
            fragment: parts.fragment,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_absolute(&self) -> bool {
        !self.netloc.is_empty()
    }

    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// True for links that never name a page (`mailto:`, `javascript:`, ...).
    pub fn is_opaque(&self) -> bool {
        !WEB_SCHEMES.contains(&self.scheme.as_str())
    }

    /// `#anchor` within the current page.
    pub fn is_fragment_only(&self) -> bool {
        self.is_relative()
            && self.path.is_empty()
            && self.params.is_empty()
            && self.query.is_none()
            && self.fragment.is_some()
    }

    /// Last path segment when it has an extension; `None` means the path names
    /// a directory whose index file is implicit.
    pub fn filename(&self) -> Option<&str> {
        filename_from_path(&self.path)
    }

    /// Path minus the filename, if any.
    pub fn directory_path(&self) -> &str {
        directory_of(&self.path)
    }

    /// Canonical string form without query and fragment.
    pub fn normalized_url(&self) -> String {
        let mut out = if self.is_absolute() {
            if self.scheme.is_empty() {
                format!("//{}{}", self.netloc, self.path)
            } else {
                format!("{}://{}{}", self.scheme, self.netloc, self.path)
            }
        } else {
            self.path.clone()
        };
        if !self.params.is_empty() {
            out.push(';');
            out.push_str(&self.params);
        }
        out
    }

    /// Whether `candidate` points at a different host than this URL.
    /// Relative candidates (no host) are always on the same site.
    pub fn is_link_to_another_site(&self, candidate: &str) -> bool {
        let other = SiteUrl::parse(candidate);
        other.is_absolute() && other.netloc != self.netloc
    }

    /// Resolves `reference` against this URL's canonical form.
    pub fn join(&self, reference: &str) -> Option<String> {
        if self.is_relative() {
            return None;
        }
        let scheme = if self.scheme.is_empty() { "http" } else { &self.scheme };
        let base = format!("{}://{}{}", scheme, self.netloc, self.path);
        join_reference(&base, reference)
    }
}

impl PartialEq for SiteUrl {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_absolute(), other.is_absolute()) {
            (true, true) => self.netloc == other.netloc && self.path == other.path,
            (false, false) => self.path == other.path,
            _ => false,
        }
    }
}

impl Eq for SiteUrl {}

impl fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized_url())
    }
}

impl From<&str> for SiteUrl {
    fn from(raw: &str) -> Self {
        SiteUrl::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_trailing_separator() {
        assert_eq!(
            SiteUrl::parse("http://www.abc.com/qwerty"),
            SiteUrl::parse("http://www.abc.com/qwerty/")
        );
    }

    #[test]
    fn distinct_paths_differ() {
        assert_ne!(
            SiteUrl::parse("http://www.abc.com/qwerty/foo"),
            SiteUrl::parse("http://www.abc.com/qwerty")
        );
    }

    #[test]
    fn equality_ignores_scheme_query_and_fragment() {
        assert_eq!(
            SiteUrl::parse("https://abc.com/a?x=1#top"),
            SiteUrl::parse("http://www.abc.com/a")
        );
        assert_eq!(SiteUrl::parse("a/b.html#x"), SiteUrl::parse("a/b.html"));
        assert_ne!(SiteUrl::parse("/a"), SiteUrl::parse("http://abc.com/a"));
    }

    #[test]
    fn normalized_url_adds_www() {
        assert_eq!(
            SiteUrl::parse("http://abc.com/qwerty").normalized_url(),
            "http://www.abc.com/qwerty"
        );
        assert_eq!(
            SiteUrl::parse("https://abc.com/?q=1#x").normalized_url(),
            "https://www.abc.com"
        );
        assert_eq!(SiteUrl::parse("qwerty/foo/").normalized_url(), "qwerty/foo");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in [
            "http://abc.com/qwerty/",
            "https://www.abc.com",
            "//cdn.abc.com/a/b.html",
            "../foo/example.html",
        ] {
            let once = SiteUrl::parse(raw);
            let twice = SiteUrl::parse(&once.normalized_url());
            assert_eq!(twice.normalized_url(), once.normalized_url());
        }
    }

    #[test]
    fn absolute_and_relative() {
        assert!(SiteUrl::parse("http://abc.com").is_absolute());
        assert!(SiteUrl::parse("//abc.com/x").is_absolute());
        assert!(SiteUrl::parse("qwerty/foo").is_relative());
        assert!(SiteUrl::parse("/qwerty").is_relative());
    }

    #[test]
    fn link_to_another_site() {
        let page = SiteUrl::parse("http://www.abc.com/page.html");
        assert!(!page.is_link_to_another_site("http://abc.com/other"));
        assert!(!page.is_link_to_another_site("http://www.abc.com/other"));
        assert!(!page.is_link_to_another_site("relative/link.html"));
        assert!(page.is_link_to_another_site("http://xyz.com/other"));
        assert!(page.is_link_to_another_site("http://sub.abc.com/"));
    }

    #[test]
    fn filename_inference() {
        assert_eq!(
            SiteUrl::parse("http://abc.com/qwerty/foo/example.html").filename(),
            Some("example.html")
        );
        assert_eq!(SiteUrl::parse("http://abc.com/qwerty/foo").filename(), None);
        assert_eq!(SiteUrl::parse("http://abc.com").filename(), None);
    }

    #[test]
    fn fragment_only_references() {
        assert!(SiteUrl::parse("#top").is_fragment_only());
        assert!(SiteUrl::parse("  #").is_fragment_only());
        assert!(!SiteUrl::parse("page.html#top").is_fragment_only());
        assert!(!SiteUrl::parse("?q=1#top").is_fragment_only());
        assert!(!SiteUrl::parse("http://abc.com/#top").is_fragment_only());
    }

    #[test]
    fn opaque_schemes() {
        assert!(SiteUrl::parse("mailto:someone@abc.com").is_opaque());
        assert!(SiteUrl::parse("javascript:void(0)").is_opaque());
        assert!(!SiteUrl::parse("https://abc.com").is_opaque());
        assert!(!SiteUrl::parse("page.html").is_opaque());
    }

    #[test]
    fn params_are_carried_but_not_compared() {
        let a = SiteUrl::parse("http://abc.com/a/page.html;jsessionid=1");
        assert_eq!(a.normalized_url(), "http://www.abc.com/a/page.html;jsessionid=1");
        assert_eq!(a.filename(), Some("page.html"));
        assert_eq!(a, SiteUrl::parse("http://abc.com/a/page.html"));
    }

    #[test]
    fn join_uses_canonical_host() {
        let page = SiteUrl::parse("http://abc.com/spam/index.html");
        assert_eq!(
            page.join("../foo/example.html").as_deref(),
            Some("http://www.abc.com/foo/example.html")
        );
        assert_eq!(SiteUrl::parse("relative.html").join("x.html"), None);
    }
}
