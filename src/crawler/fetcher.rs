//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - The `Fetcher` seam the crawl session is generic over
//! - Building the HTTP client with the configured user agent and timeouts
//! - Single GET requests, classifying status codes >= 400 as failures
//!
//! There are no retries; a failed fetch is final for that URL.

use crate::config::FetchConfig;
use crate::FetchError;
use reqwest::Client;
use std::future::Future;

/// Anything that can turn a URL into page body text
///
/// Implementations perform exactly one attempt per call.
pub trait Fetcher: Send + Sync {
    /// Fetches `url`, returning the full response body as text
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use sumi_scout::config::FetchConfig;
/// use sumi_scout::crawler::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with a single GET request
///
/// | Condition | Result |
/// |-----------|--------|
/// | Transport failure (DNS, connect, timeout, TLS) | `FetchError::Request` |
/// | Status code >= 400 | `FetchError::Status` |
/// | Body could not be read as text | `FetchError::Body` |
/// | Anything else | the body text |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_url(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status.as_u16() >= 400 {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })
}

/// `Fetcher` backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a client built from `config`
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::from_client(build_http_client(config)?))
    }

    /// Wraps an existing client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send {
        fetch_url(&self.client, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> FetchConfig {
        FetchConfig {
            user_agent: "TestScout/1.0".to_string(),
            timeout: 5,
            connect_timeout: 2,
        }
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&create_test_config());
        assert!(client.is_ok());
    }

    #[test]
    fn test_http_fetcher_from_config() {
        let fetcher = HttpFetcher::new(&create_test_config());
        assert!(fetcher.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_is_request_error() {
        let fetcher = HttpFetcher::new(&create_test_config()).unwrap();
        let result = fetcher.fetch("not a url").await;

        match result {
            Err(FetchError::Request { url, .. }) => assert_eq!(url, "not a url"),
            other => panic!("expected request error, got {:?}", other),
        }
    }

    // Status and body handling are covered against a mock server in
    // tests/integration/fetch_tests.rs
}
