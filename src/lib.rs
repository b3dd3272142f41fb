//! Sumi-Scout: a concurrent, depth-limited site mapper
//!
//! This crate crawls a single site from a seed URL. Every fetched page is
//! scanned for scripts, images, stylesheet links and hyperlinks; hyperlinks on
//! the seed's host are followed up to a configured depth by a fixed pool of
//! workers sharing one crawl state.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Sumi-Scout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid start URL: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("Worker task failed: {0}")]
    Worker(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Start URL errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlError {
    #[error("length {0} is outside 11..=2000 characters")]
    InvalidLength(usize),

    #[error("failed to parse URL: {0}")]
    Parse(String),

    #[error("the start URL is relative")]
    Relative,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("missing host in URL")]
    MissingHost,
}

/// Errors produced by a single page fetch
///
/// A fetch error never ends a crawl; the page is recorded as not scraped.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

impl FetchError {
    /// The URL whose fetch failed
    pub fn url(&self) -> &str {
        match self {
            Self::Request { url, .. } | Self::Status { url, .. } | Self::Body { url, .. } => url,
        }
    }
}

/// Result type alias for Sumi-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, Fetcher, HttpFetcher, Session, SessionConfig};
pub use output::{CrawlReport, OutputFormat};
pub use state::{CrawlState, Page, UrlRecord};
pub use url::{resolve_reference, LinkScope, RootHost};
