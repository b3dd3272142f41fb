//! The worker loop
//!
//! Every worker repeats the same cycle against the shared crawl state until
//! no URL is remaining or in flight anywhere:
//!
//! 1. Stop if the state is exhausted
//! 2. Claim a remaining URL; if none is available, sleep and retry
//! 3. Fetch it, extract references on success, and commit the page
//! 4. Below the depth limit, enqueue the page's internal links

use crate::crawler::extractor::extract;
use crate::crawler::fetcher::Fetcher;
use crate::state::{CrawlState, Page, UrlRecord};
use crate::url::RootHost;
use std::ops::AddAssign;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// What one worker did over its lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStats {
    /// Pages fetched and extracted
    pub scraped: u64,

    /// Pages whose fetch failed
    pub failed: u64,

    /// Times the worker found the frontier empty while work was in flight
    pub idle_polls: u64,
}

impl AddAssign for WorkerStats {
    fn add_assign(&mut self, other: Self) {
        self.scraped += other.scraped;
        self.failed += other.failed;
        self.idle_polls += other.idle_polls;
    }
}

/// Everything the workers of one session share
pub(crate) struct WorkerContext<F> {
    pub state: Arc<CrawlState>,
    pub fetcher: F,
    pub root: RootHost,
    pub max_depth: u32,
    pub idle_interval: Duration,
}

/// Runs one worker until the crawl is exhausted
pub(crate) async fn run_worker<F: Fetcher>(id: usize, ctx: Arc<WorkerContext<F>>) -> WorkerStats {
    tracing::info!("Started worker {}", id);
    let mut stats = WorkerStats::default();

    while !ctx.state.is_exhausted() {
        let Some(record) = ctx.state.claim_next() else {
            stats.idle_polls += 1;
            tokio::time::sleep(ctx.idle_interval).await;
            continue;
        };

        if process_url(&ctx, record).await {
            stats.scraped += 1;
        } else {
            stats.failed += 1;
        }
    }

    tracing::info!(
        "Stopped worker {} ({} scraped, {} failed)",
        id,
        stats.scraped,
        stats.failed
    );
    stats
}

/// Processes one claimed URL, returning whether the fetch succeeded
///
/// The claimed URL is always completed, whatever the outcome.
async fn process_url<F: Fetcher>(ctx: &WorkerContext<F>, record: UrlRecord) -> bool {
    tracing::debug!(depth = record.depth, "Process: {}", record.url);

    let body = match ctx.fetcher.fetch(record.key()).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Fetch failed: {}", e);
            ctx.state.complete(record.key(), Page::failed(record.key()));
            return false;
        }
    };

    let page = extract(&ctx.root, &record.url, &body);

    if record.depth >= ctx.max_depth {
        ctx.state.complete_and_expand(&record, page, Vec::new());
        tracing::trace!("Not expanding {} at max depth {}", record.url, record.depth);
        return true;
    }

    let links: Vec<Url> = page
        .internal_links
        .iter()
        .filter_map(|link| Url::parse(link).ok())
        .collect();

    let added = ctx.state.complete_and_expand(&record, page, links);
    tracing::trace!(
        "{} new URLs enqueued from {} at depth {}",
        added,
        record.url,
        record.depth + 1
    );

    true
}
