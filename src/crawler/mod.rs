//! Crawler module for page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `Fetcher` seam
//! - Regex-based reference extraction
//! - The worker loop that claims, fetches, extracts and enqueues
//! - The session that runs a worker pool to completion

mod extractor;
mod fetcher;
mod session;
mod worker;

pub use extractor::extract;
pub use fetcher::{build_http_client, fetch_url, Fetcher, HttpFetcher};
pub use session::{Session, SessionConfig};
pub use worker::WorkerStats;

use crate::config::Config;
use crate::output::CrawlReport;
use crate::ScoutError;
use url::Url;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client from the `[fetch]` settings
/// 2. Seed the crawl state with `seed` at depth 1
/// 3. Run the configured number of workers until nothing is left
/// 4. Return every processed page with summary statistics
///
/// # Arguments
///
/// * `seed` - A validated start URL (see `config::prepare_start_url`)
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl finished; individual fetch failures are in the report
/// * `Err(ScoutError)` - The crawl could not be started or a worker panicked
pub async fn crawl(seed: Url, config: &Config) -> Result<CrawlReport, ScoutError> {
    let fetcher = HttpFetcher::new(&config.fetch)?;
    let session = Session::new(SessionConfig::from_config(seed, &config.crawler), fetcher)?;
    session.run().await
}
