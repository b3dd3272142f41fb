/// Page result definitions
///
/// A `Page` is produced exactly once for every URL a worker claims, whether
/// or not the fetch succeeded, and is never modified afterwards.
use serde::{Deserialize, Serialize};

/// The references found on one processed URL
///
/// All sequences hold absolute URLs in order of first appearance on the
/// page; duplicates are kept. An unscraped page has every sequence empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// The URL this page was fetched from
    pub url: String,

    /// Whether the fetch succeeded
    pub scraped: bool,

    /// `<script src>` references
    pub scripts: Vec<String>,

    /// `<img src>` references
    pub images: Vec<String>,

    /// `<link href>` references
    pub css_links: Vec<String>,

    /// Hyperlinks on the crawl's root host
    pub internal_links: Vec<String>,

    /// All other hyperlinks
    pub external_links: Vec<String>,
}

impl Page {
    /// Creates the record for a URL whose fetch failed
    pub fn failed(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            scraped: false,
            scripts: Vec::new(),
            images: Vec::new(),
            css_links: Vec::new(),
            internal_links: Vec::new(),
            external_links: Vec::new(),
        }
    }

    /// Total number of references of every kind on this page
    pub fn reference_count(&self) -> usize {
        self.scripts.len()
            + self.images.len()
            + self.css_links.len()
            + self.internal_links.len()
            + self.external_links.len()
    }
}
