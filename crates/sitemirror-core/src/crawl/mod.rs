//! Crawl orchestration: link classification, claiming and depth-first recursion.
//!
//! Rewriting a page may trigger a full fetch-rewrite-persist cycle for each
//! newly claimed same-site link before the rest of that page is rewritten; a
//! page is written only after all of its links (and their subtrees) are done.

mod error;
mod outcome;
mod session;

pub use error::MirrorError;
pub use outcome::{CrawlSummary, FetchOutcome};
pub use session::CrawlSession;

use std::path::PathBuf;
use std::rc::Rc;

use crate::config::MirrorConfig;
use crate::confirm::Confirmer;
use crate::fetch::Fetcher;
use crate::local_path::{self, LocalPath};
use crate::rewriter::{DocumentRewriter, LinkResolver};
use crate::storage::{self, PersistOutcome};
use crate::url_model::{join_reference, SiteUrl};

/// Run options that come from the command line rather than the config file.
#[derive(Debug, Clone)]
pub struct MirrorOptions {
    /// Leave existing destination files untouched.
    pub only_update: bool,
    /// Extensions whose content is link-rewritten; everything else is stored as text.
    pub markup_extensions: Vec<String>,
}

impl Default for MirrorOptions {
    fn default() -> Self {
        Self {
            only_update: false,
            markup_extensions: MirrorConfig::default().markup_extensions,
        }
    }
}

impl From<&MirrorConfig> for MirrorOptions {
    fn from(cfg: &MirrorConfig) -> Self {
        Self {
            only_update: false,
            markup_extensions: cfg.markup_extensions.clone(),
        }
    }
}

/// Mirrors one site into a local directory.
pub struct Mirror {
    root_url: String,
    session: CrawlSession,
    rewriter: Rc<DocumentRewriter>,
    fetcher: Box<dyn Fetcher>,
    confirmer: Option<Box<dyn Confirmer>>,
    options: MirrorOptions,
    summary: CrawlSummary,
    /// URLs actually requested for the pages currently being rewritten,
    /// innermost last. Relative links are joined against these.
    page_stack: Vec<String>,
    /// Where links naming the root URL would land on their own, when that
    /// differs from the root index (root URL with a path).
    root_alias: Option<PathBuf>,
}

impl Mirror {
    pub fn new(
        root_url: &str,
        root_path: impl Into<PathBuf>,
        fetcher: Box<dyn Fetcher>,
        options: MirrorOptions,
    ) -> Self {
        let root_url = root_url.trim().to_string();
        let root_site_name = SiteUrl::parse(&root_url).normalized_url();
        Self {
            root_url,
            session: CrawlSession::new(root_path, root_site_name),
            rewriter: Rc::new(DocumentRewriter::default()),
            fetcher,
            confirmer: None,
            options,
            summary: CrawlSummary::default(),
            page_stack: Vec::new(),
            root_alias: None,
        }
    }

    /// Ask `confirmer` before every download.
    pub fn with_confirmer(mut self, confirmer: Box<dyn Confirmer>) -> Self {
        self.confirmer = Some(confirmer);
        self
    }

    /// Replace the default `a`/`link` handler registry.
    pub fn with_rewriter(mut self, rewriter: DocumentRewriter) -> Self {
        self.rewriter = Rc::new(rewriter);
        self
    }

    pub fn session(&self) -> &CrawlSession {
        &self.session
    }

    pub fn summary(&self) -> &CrawlSummary {
        &self.summary
    }

    /// Fetches the root page and everything reachable from it on the same site.
    ///
    /// Fails only when the root page itself cannot be fetched, rewritten or
    /// saved; failures below the root are counted in the summary.
    pub fn run(mut self) -> Result<CrawlSummary, MirrorError> {
        let root = SiteUrl::parse(&self.root_url);
        if !root.is_absolute() || root.is_opaque() {
            return Err(MirrorError::InvalidRootUrl(self.root_url));
        }

        let target = local_path::root_index(self.session.root_path());
        self.session.claim(&target);
        let alias = local_path::resolve(&root, &root, self.session.root_path()).canonical();
        if alias != target.canonical() {
            self.root_alias = Some(alias);
        }
        tracing::info!(
            url = %self.root_url,
            root = %self.session.root_path().display(),
            "mirroring {}",
            self.session.root_site_name()
        );

        let url = self.root_url.clone();
        let outcome = self.fetch_and_rewrite(&url, &root, &target);
        self.summary.record(&outcome);
        tracing::info!(
            claimed = self.session.claimed_count(),
            attempted = self.summary.attempted(),
            "mirror finished: {}",
            self.summary
        );

        match outcome {
            FetchOutcome::Transport(source) => Err(MirrorError::RootFetch { url, source }),
            FetchOutcome::HttpStatus(status) => Err(MirrorError::RootStatus { url, status }),
            FetchOutcome::Rewrite(source) => Err(MirrorError::RootRewrite { url, source }),
            FetchOutcome::Persist(reason) => Err(MirrorError::RootPersist { url, reason }),
            FetchOutcome::Saved(_) | FetchOutcome::AlreadyPresent(_) | FetchOutcome::Declined => {
                Ok(self.summary)
            }
        }
    }

    /// One fetch-rewrite-persist cycle for an already claimed `target`.
    /// `page` is the canonical URL links on this page are resolved against.
    fn fetch_and_rewrite(&mut self, url: &str, page: &SiteUrl, target: &LocalPath) -> FetchOutcome {
        let destination = target.full_path();

        if let Some(confirmer) = &self.confirmer {
            if !confirmer.confirm(url, &destination) {
                tracing::info!(url, "download declined");
                return FetchOutcome::Declined;
            }
        }

        let response = match self.fetcher.fetch(url) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url, error = %e, connection = e.is_connection(), "fetch failed");
                return FetchOutcome::Transport(e);
            }
        };
        if !response.is_success() {
            tracing::warn!(url, status = response.status, "unexpected HTTP status");
            return FetchOutcome::HttpStatus(response.status);
        }

        let text = String::from_utf8_lossy(&response.body).into_owned();
        let content = if target.is_markup(&self.options.markup_extensions) {
            let rewriter = Rc::clone(&self.rewriter);
            self.page_stack.push(url.to_string());
            let rewritten = rewriter.rewrite(&text, &page.normalized_url(), self);
            self.page_stack.pop();
            match rewritten {
                Ok(html) => html,
                Err(e) => {
                    tracing::warn!(url, error = %e, "rewrite failed");
                    return FetchOutcome::Rewrite(e);
                }
            }
        } else {
            text
        };

        match storage::persist_text(target, &content, self.options.only_update) {
            Ok(PersistOutcome::Written(path)) => {
                tracing::info!(url, path = %path.display(), "saved");
                FetchOutcome::Saved(path)
            }
            Ok(PersistOutcome::AlreadyPresent(path)) => {
                tracing::debug!(url, path = %path.display(), "already present, not overwritten");
                FetchOutcome::AlreadyPresent(path)
            }
            Err(e) => {
                tracing::warn!(url, error = %format!("{:#}", e), "save failed");
                FetchOutcome::Persist(e)
            }
        }
    }

    /// Absolute URL to request for `raw_link` found on the current page.
    fn target_url(&self, raw_link: &str, base: &SiteUrl) -> Option<String> {
        match self.page_stack.last() {
            Some(page_url) => join_reference(page_url, raw_link),
            None => base.join(raw_link),
        }
    }
}

impl LinkResolver for Mirror {
    fn resolve_link(&mut self, raw_link: &str, base_url: &str) -> String {
        let link = SiteUrl::parse(raw_link);
        let base = SiteUrl::parse(base_url);

        if link.is_fragment_only() || link.is_opaque() {
            return raw_link.to_string();
        }
        if base.is_link_to_another_site(raw_link) {
            tracing::debug!(link = raw_link, "off-site link left as is");
            return raw_link.to_string();
        }

        let mut target = local_path::resolve(&link, &base, self.session.root_path());
        if self.root_alias.as_ref() == Some(&target.canonical()) {
            target = local_path::root_index(self.session.root_path());
        }
        let reference = target.full_path().to_string_lossy().into_owned();

        if link.is_absolute() && link == base {
            return reference;
        }
        if !self.session.claim(&target) {
            tracing::debug!(link = raw_link, path = %reference, "already claimed");
            return reference;
        }

        match self.target_url(raw_link, &base) {
            Some(url) => {
                let page = SiteUrl::parse(&url);
                let outcome = self.fetch_and_rewrite(&url, &page, &target);
                self.summary.record(&outcome);
            }
            None => {
                tracing::warn!(link = raw_link, base = base_url, "cannot build absolute URL");
            }
        }
        reference
    }
}
