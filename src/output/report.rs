//! Crawl report and summary statistics

use crate::state::Page;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// The result of a finished crawl
///
/// Serializes as `{"pages": {...}}`; the summary is only used by the text
/// and markdown formatters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CrawlReport {
    /// Every processed URL and what was found on it, sorted by URL
    pub pages: BTreeMap<String, Page>,

    #[serde(skip)]
    pub summary: CrawlSummary,
}

impl CrawlReport {
    /// Builds a report, tallying the summary counters from `pages`
    pub fn new(pages: BTreeMap<String, Page>, mut summary: CrawlSummary) -> Self {
        summary.record_pages(&pages);
        Self { pages, summary }
    }
}

/// Summary statistics for a crawl
#[derive(Debug, Clone, Default)]
pub struct CrawlSummary {
    // Run metadata
    pub seed: String,
    pub root_host: String,
    pub workers: usize,
    pub max_depth: u32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub config_hash: Option<String>,

    // Page outcomes
    pub pages_scraped: u64,
    pub pages_failed: u64,

    // Reference totals
    pub total_scripts: u64,
    pub total_images: u64,
    pub total_css_links: u64,
    pub total_internal_links: u64,
    pub total_external_links: u64,

    // Distinct external links, sorted
    pub external_links: Vec<String>,

    // Failed URLs, sorted
    pub failed_pages: Vec<String>,

    // Processed pages per discovery depth
    pub depth_breakdown: BTreeMap<u32, u64>,
}

impl CrawlSummary {
    /// Creates a new empty crawl summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the outcome and reference counts of `pages` to this summary
    pub fn record_pages(&mut self, pages: &BTreeMap<String, Page>) {
        let mut external = BTreeSet::new();

        for page in pages.values() {
            if !page.scraped {
                self.pages_failed += 1;
                self.failed_pages.push(page.url.clone());
                continue;
            }

            self.pages_scraped += 1;
            self.total_scripts += page.scripts.len() as u64;
            self.total_images += page.images.len() as u64;
            self.total_css_links += page.css_links.len() as u64;
            self.total_internal_links += page.internal_links.len() as u64;
            self.total_external_links += page.external_links.len() as u64;
            external.extend(page.external_links.iter().cloned());
        }

        external.extend(self.external_links.drain(..));
        self.external_links = external.into_iter().collect();
        self.failed_pages.sort();
    }

    /// Total number of processed pages
    pub fn total_pages(&self) -> u64 {
        self.pages_scraped + self.pages_failed
    }

    /// Returns the success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        let total = self.total_pages();
        if total == 0 {
            return 0.0;
        }
        (self.pages_scraped as f64 / total as f64) * 100.0
    }

    /// Wall-clock duration of the crawl
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}
