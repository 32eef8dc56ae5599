//! Page fetching.
//!
//! The crawl only depends on the [`Fetcher`] trait; [`CurlFetcher`] is the
//! libcurl-backed implementation used by the CLI.

mod error;

pub use error::FetchError;

use std::time::Duration;

use crate::config::MirrorConfig;

/// Status and raw body of one GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a blocking GET for one URL.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError>;
}

/// Transfer settings for [`CurlFetcher`].
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub user_agent: Option<String>,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub max_redirections: u32,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self::from(&MirrorConfig::default())
    }
}

impl From<&MirrorConfig> for HttpOptions {
    fn from(cfg: &MirrorConfig) -> Self {
        Self {
            user_agent: cfg.user_agent.clone(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            max_redirections: cfg.max_redirections,
        }
    }
}

/// Single-handle GET over libcurl. Runs in the current thread.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    options: HttpOptions,
}

impl CurlFetcher {
    pub fn new(options: HttpOptions) -> Self {
        Self { options }
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.options.max_redirections)?;
        easy.connect_timeout(self.options.connect_timeout)?;
        easy.timeout(self.options.timeout)?;
        if let Some(agent) = &self.options.user_agent {
            easy.useragent(agent)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!(url, status, bytes = body.len(), "GET finished");
        Ok(FetchResponse { status, body })
    }
}
