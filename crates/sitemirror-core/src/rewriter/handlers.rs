//! Attribute rewriting capabilities, one per kind of link-bearing element.

use super::LinkResolver;

/// Rewrites the link-bearing attributes of one element kind.
pub trait AttributeRewriter {
    /// Returns the replacement for attribute `name` with `value`, or `None`
    /// when this capability does not own the attribute.
    fn rewrite(
        &self,
        name: &str,
        value: &str,
        base_url: &str,
        resolver: &mut dyn LinkResolver,
    ) -> Option<String>;
}

/// Resolves `href` through the crawl (used for `<a>` and `<link>`).
#[derive(Debug, Default, Clone, Copy)]
pub struct HrefRewriter;

impl AttributeRewriter for HrefRewriter {
    fn rewrite(
        &self,
        name: &str,
        value: &str,
        base_url: &str,
        resolver: &mut dyn LinkResolver,
    ) -> Option<String> {
        if !name.eq_ignore_ascii_case("href") {
            return None;
        }
        Some(resolver.resolve_link(value, base_url))
    }
}
