pub mod config;
pub mod logging;

pub mod confirm;
pub mod crawl;
pub mod fetch;
pub mod local_path;
pub mod rewriter;
pub mod storage;
pub mod url_model;

pub use crawl::{CrawlSummary, Mirror, MirrorError, MirrorOptions};
