//! # File Fetcher
//!
//! This module abstracts the download capability behind the [`FileFetcher`]
//! trait, so the Mirror Runner's path computation can be exercised without a
//! real network.  The production implementation is [`HttpFetcher`], a thin
//! wrapper over a blocking HTTP client.

use std::{fs::File, path::Path, time::Duration};

use reqwest::blocking::{Client, Response};

use crate::mirror::errors::MirrorError;

/// Default timeout for HTTP requests in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// A capability for fetching remote resources.
///
/// Implementations perform one blocking request per call and surface any
/// transport or status failure as a [`MirrorError`]; the caller decides
/// whether that aborts the run.
pub trait FileFetcher {
    /// Fetches a remote resource and returns its body as UTF-8 text.
    fn fetch_text(&self, url: &str) -> Result<String, MirrorError>;

    /// Downloads a remote resource to `destination`, overwriting any
    /// existing file at that path.
    ///
    /// # Returns
    ///
    /// The number of bytes written on success, or a [`MirrorError`] on
    /// failure.
    fn fetch_to_file(&self, url: &str, destination: &Path) -> Result<u64, MirrorError>;
}

/// HTTP-based file fetcher.
///
/// Follows redirects and treats any non-success status code as an error.
#[derive(Debug)]
pub struct HttpFetcher {
    client: Client,
    pub(crate) timeout: Duration,
}

impl HttpFetcher {
    /// Creates a new HTTP fetcher with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new HTTP fetcher with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, timeout }
    }

    /// Issues a GET request and checks the response status.
    fn get(&self, url: &str) -> Result<Response, MirrorError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|error| MirrorError::Fetch {
                url: url.to_string(),
                error,
            })?;

        if !response.status().is_success() {
            return Err(MirrorError::HttpStatus {
                url: url.to_string(),
                status: response.status(),
            });
        }

        Ok(response)
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FileFetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, MirrorError> {
        self.get(url)?.text().map_err(|error| MirrorError::Fetch {
            url: url.to_string(),
            error,
        })
    }

    fn fetch_to_file(&self, url: &str, destination: &Path) -> Result<u64, MirrorError> {
        let mut response = self.get(url)?;

        // `File::create` truncates, which gives the overwrite semantics
        // re-runs rely on.
        let mut file = File::create(destination).map_err(|error| MirrorError::IoWrite {
            path: destination.to_path_buf(),
            error,
        })?;

        response
            .copy_to(&mut file)
            .map_err(|error| MirrorError::Fetch {
                url: url.to_string(),
                error,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_fetcher_default_timeout() {
        let fetcher = HttpFetcher::default();
        assert_eq!(fetcher.timeout.as_secs(), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_http_fetcher_with_timeout() {
        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(60));
        assert_eq!(fetcher.timeout.as_secs(), 60);
    }
}
