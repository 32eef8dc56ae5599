//! Errors that end a mirror run.

use crate::fetch::FetchError;
use crate::rewriter::RewriteError;

/// Raised only for the root page: without it there is nothing to crawl.
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    #[error("root URL must be an absolute http(s) URL, got {0:?}")]
    InvalidRootUrl(String),
    #[error("fetching root page {url} failed")]
    RootFetch {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("root page {url} returned HTTP {status}")]
    RootStatus { url: String, status: u32 },
    #[error("rewriting root page {url} failed")]
    RootRewrite {
        url: String,
        #[source]
        source: RewriteError,
    },
    #[error("saving root page {url} failed: {reason:#}")]
    RootPersist { url: String, reason: anyhow::Error },
}
