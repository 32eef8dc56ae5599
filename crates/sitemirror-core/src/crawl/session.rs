//! State of one mirror run.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::local_path::LocalPath;

/// Output root, starting page and the set of claimed local paths.
///
/// A path is claimed the moment its download is scheduled, not when it
/// completes; that is what stops cycles and duplicate downloads.
#[derive(Debug, Clone)]
pub struct CrawlSession {
    root_path: PathBuf,
    root_site_name: String,
    processed: HashSet<PathBuf>,
}

impl CrawlSession {
    pub fn new(root_path: impl Into<PathBuf>, root_site_name: impl Into<String>) -> Self {
        Self {
            root_path: root_path.into(),
            root_site_name: root_site_name.into(),
            processed: HashSet::new(),
        }
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Canonical URL of the page the crawl started from.
    pub fn root_site_name(&self) -> &str {
        &self.root_site_name
    }

    /// Check-and-mark in one step. Returns `true` if `target` was not claimed yet.
    pub fn claim(&mut self, target: &LocalPath) -> bool {
        self.processed.insert(target.canonical())
    }

    pub fn claimed_count(&self) -> usize {
        self.processed.len()
    }
}
