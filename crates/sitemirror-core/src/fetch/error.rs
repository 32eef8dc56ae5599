//! Transport error for a single page fetch.

use std::fmt;

/// Error returned when a GET could not produce any HTTP response.
/// A response with a non-2xx status is not an error at this layer.
#[derive(Debug)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, DNS, too many redirects, ...).
    Curl(curl::Error),
}

impl FetchError {
    /// True for failures that happened before any byte was exchanged
    /// (name resolution or connect).
    pub fn is_connection(&self) -> bool {
        match self {
            FetchError::Curl(e) => {
                e.is_couldnt_connect() || e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy()
            }
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Curl(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Curl(e) => Some(e),
        }
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Curl(e)
    }
}
