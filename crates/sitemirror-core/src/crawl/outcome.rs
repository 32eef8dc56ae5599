//! Result of one fetch-and-persist cycle, and run totals.

use std::fmt;
use std::path::PathBuf;

use crate::fetch::FetchError;
use crate::rewriter::RewriteError;

/// What happened to one claimed target. Only the root page's failures stop
/// the run; for every other target the crawl moves on.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Written to disk.
    Saved(PathBuf),
    /// Only-update mode and the file already existed.
    AlreadyPresent(PathBuf),
    /// The confirmation prompt was declined.
    Declined,
    /// The server answered with a non-2xx status.
    HttpStatus(u32),
    /// No response at all.
    Transport(FetchError),
    /// The markup could not be streamed through the rewriter.
    Rewrite(RewriteError),
    /// Directory creation or write failed.
    Persist(anyhow::Error),
}

/// Per-outcome counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    pub saved: usize,
    pub already_present: usize,
    pub declined: usize,
    pub http_errors: usize,
    pub transport_errors: usize,
    pub rewrite_errors: usize,
    pub persist_errors: usize,
}

impl CrawlSummary {
    pub fn record(&mut self, outcome: &FetchOutcome) {
        match outcome {
            FetchOutcome::Saved(_) => self.saved += 1,
            FetchOutcome::AlreadyPresent(_) => self.already_present += 1,
            FetchOutcome::Declined => self.declined += 1,
            FetchOutcome::HttpStatus(_) => self.http_errors += 1,
            FetchOutcome::Transport(_) => self.transport_errors += 1,
            FetchOutcome::Rewrite(_) => self.rewrite_errors += 1,
            FetchOutcome::Persist(_) => self.persist_errors += 1,
        }
    }

    pub fn failures(&self) -> usize {
        self.http_errors + self.transport_errors + self.rewrite_errors + self.persist_errors
    }

    pub fn attempted(&self) -> usize {
        self.saved + self.already_present + self.declined + self.failures()
    }
}

impl fmt::Display for CrawlSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} saved, {} already present, {} declined, {} failed",
            self.saved,
            self.already_present,
            self.declined,
            self.failures()
        )
    }
}
