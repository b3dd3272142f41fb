//! Reference extraction from raw page text
//!
//! Pages are scanned with four independent patterns rather than parsed as
//! HTML, so broken markup never stops extraction:
//!
//! - `<script ... src=...>` → scripts
//! - `<img ... src=...>` → images
//! - `<link ... href=...>` → CSS links
//! - `<a ... href=...>` → hyperlinks, split into internal and external
//!
//! Each match is resolved against the page URL; matches that do not resolve
//! are dropped. Tags are matched case-sensitively.

use crate::state::Page;
use crate::url::{partition_links, resolve_all, RootHost};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static SCRIPT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<script [^>]*?src=[ ]*['"]?([^>'"]+)['"]?[^>]*>"#).expect("valid script pattern")
});

static IMAGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<img [^>]*?src=[ ]*['"]?([^>'"]+)['"]?[^>]*>"#).expect("valid image pattern")
});

static CSS_LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<link [^>]*href=[ ]*['"]?([^>'"]+)['"]?[^>]*>"#).expect("valid link pattern")
});

static HYPERLINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<a [^>]*href=[ ]*['"]?([^>'"]+)['"]?[^>]*>"#).expect("valid anchor pattern")
});

/// Extracts every classified reference from a page body
///
/// Extraction is a pure function of its inputs and never fails; a body with
/// no matching tags yields a scraped page with every list empty.
///
/// # Arguments
///
/// * `root` - The crawl's root host, used to split hyperlinks
/// * `page_url` - The URL the body was fetched from
/// * `body` - The raw response text
///
/// # Example
///
/// ```
/// use sumi_scout::crawler::extract;
/// use sumi_scout::url::RootHost;
/// use url::Url;
///
/// let page_url = Url::parse("http://localhost:9000/index.html").unwrap();
/// let root = RootHost::from_url(&page_url).unwrap();
/// let body = r#"<a href="about.html">About</a> <a href="https://github.com/">Code</a>"#;
///
/// let page = extract(&root, &page_url, body);
/// assert_eq!(page.internal_links, vec!["http://localhost:9000/about.html"]);
/// assert_eq!(page.external_links, vec!["https://github.com/"]);
/// ```
pub fn extract(root: &RootHost, page_url: &Url, body: &str) -> Page {
    let body = body.replace('\n', " ");

    let links = resolve_all(page_url, raw_references(&HYPERLINK_PATTERN, &body));
    let (internal_links, external_links) = partition_links(root, links);

    Page {
        url: page_url.to_string(),
        scraped: true,
        scripts: scan(&SCRIPT_PATTERN, page_url, &body),
        images: scan(&IMAGE_PATTERN, page_url, &body),
        css_links: scan(&CSS_LINK_PATTERN, page_url, &body),
        internal_links,
        external_links,
    }
}

/// Raw captured attribute values, in order of appearance
fn raw_references<'b>(pattern: &Regex, body: &'b str) -> Vec<&'b str> {
    pattern
        .captures_iter(body)
        .filter_map(|captures| captures.get(1))
        .map(|capture| capture.as_str())
        .collect()
}

fn scan(pattern: &Regex, page_url: &Url, body: &str) -> Vec<String> {
    resolve_all(page_url, raw_references(pattern, body))
        .into_iter()
        .map(String::from)
        .collect()
}
