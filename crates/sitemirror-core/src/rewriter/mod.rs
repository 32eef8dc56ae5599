//! Streaming link rewriting over `lol_html`.
//!
//! Doctype, comments, text and untouched tags are re-emitted verbatim. Start
//! tags of registered elements get their link attributes replaced by whatever
//! the [`LinkResolver`] returns for them. Handlers see attribute values with
//! character references decoded.

mod entities;
mod handlers;

pub use handlers::{AttributeRewriter, HrefRewriter};

use lol_html::errors::RewritingError;
use lol_html::{element, rewrite_str, RewriteStrSettings};
use std::collections::HashMap;
use std::rc::Rc;

/// Turns a raw link found in a page into the reference written back.
pub trait LinkResolver {
    fn resolve_link(&mut self, raw_link: &str, base_url: &str) -> String;
}

/// The document could not be streamed through the rewriter.
#[derive(Debug, thiserror::Error)]
#[error("failed to rewrite document: {0}")]
pub struct RewriteError(#[from] RewritingError);

/// Element name -> attribute rewriting capability.
pub struct DocumentRewriter {
    handlers: HashMap<String, Rc<dyn AttributeRewriter>>,
}

impl Default for DocumentRewriter {
    /// `a` and `link`, both resolving `href`.
    fn default() -> Self {
        let mut rewriter = Self::empty();
        let href: Rc<dyn AttributeRewriter> = Rc::new(HrefRewriter);
        rewriter.register("a", Rc::clone(&href));
        rewriter.register("link", href);
        rewriter
    }
}

impl DocumentRewriter {
    /// A rewriter without handlers: output equals input.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers (or replaces) the capability for `element`.
    pub fn register(&mut self, element: &str, handler: Rc<dyn AttributeRewriter>) {
        self.handlers.insert(element.to_ascii_lowercase(), handler);
    }

    /// Streams `html` through the registered handlers. `base_url` is the
    /// canonical URL of the page being rewritten.
    ///
    /// Empty or whitespace-only attribute values never reach a handler, and
    /// attributes whose resolved value equals the decoded original are left
    /// as written.
    pub fn rewrite(
        &self,
        html: &str,
        base_url: &str,
        resolver: &mut dyn LinkResolver,
    ) -> Result<String, RewriteError> {
        if self.handlers.is_empty() {
            return Ok(html.to_string());
        }
        let handlers = &self.handlers;

        let output = rewrite_str(
            html,
            RewriteStrSettings {
                element_content_handlers: vec![element!("*", |el| {
                    let name = el.tag_name().to_ascii_lowercase();
                    let Some(handler) = handlers.get(&name) else {
                        return Ok(());
                    };
                    let attributes: Vec<(String, String)> = el
                        .attributes()
                        .iter()
                        .map(|a| (a.name(), a.value()))
                        .collect();
                    for (attr, raw) in attributes {
                        if raw.trim().is_empty() {
                            continue;
                        }
                        let value = entities::decode_attribute(&raw);
                        if let Some(replacement) = handler.rewrite(&attr, &value, base_url, resolver) {
                            if replacement != value {
                                el.set_attribute(&attr, &entities::encode_attribute(&replacement))?;
                            }
                        }
                    }
                    Ok(())
                })],
                ..RewriteStrSettings::new()
            },
        )?;
        Ok(output)
    }
}
