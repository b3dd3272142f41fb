//! Crawl session - worker pool lifecycle
//!
//! A session owns the crawl state for one run. It starts a fixed number of
//! workers against that state, waits until every one of them has observed
//! that nothing is remaining or in flight, and then freezes the completed
//! pages into a `CrawlReport`.

use crate::config::{CrawlerConfig, DEFAULT_IDLE_INTERVAL_MS, DEFAULT_MAX_DEPTH, DEFAULT_WORKERS};
use crate::crawler::fetcher::Fetcher;
use crate::crawler::worker::{run_worker, WorkerContext, WorkerStats};
use crate::output::{CrawlReport, CrawlSummary};
use crate::state::CrawlState;
use crate::url::RootHost;
use crate::{ConfigError, ScoutError, UrlError};
use chrono::Utc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;
use url::Url;

/// Explicit settings for one crawl session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// The URL the crawl starts from (depth 1)
    pub seed: Url,

    /// Number of concurrent workers
    pub workers: usize,

    /// Pages discovered at this depth or deeper are not expanded
    pub max_depth: u32,

    /// How long an idle worker sleeps before polling again
    pub idle_interval: Duration,
}

impl SessionConfig {
    /// Session settings with the built-in defaults
    pub fn new(seed: Url) -> Self {
        Self {
            seed,
            workers: DEFAULT_WORKERS,
            max_depth: DEFAULT_MAX_DEPTH,
            idle_interval: Duration::from_millis(DEFAULT_IDLE_INTERVAL_MS),
        }
    }

    /// Session settings taken from the `[crawler]` configuration section
    pub fn from_config(seed: Url, crawler: &CrawlerConfig) -> Self {
        Self {
            seed,
            workers: crawler.workers,
            max_depth: crawler.max_depth,
            idle_interval: crawler.idle_interval(),
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_idle_interval(mut self, idle_interval: Duration) -> Self {
        self.idle_interval = idle_interval;
        self
    }
}

/// One crawl from a single seed URL
pub struct Session<F> {
    config: SessionConfig,
    context: Arc<WorkerContext<F>>,
}

impl<F: Fetcher + 'static> Session<F> {
    /// Creates a session with the seed remaining at depth 1
    ///
    /// # Returns
    ///
    /// * `Ok(Session)` - Ready to run
    /// * `Err(ScoutError)` - Zero workers, a zero max depth, or a seed without a host
    pub fn new(config: SessionConfig, fetcher: F) -> Result<Self, ScoutError> {
        if config.workers == 0 {
            return Err(ConfigError::Validation("workers must be >= 1".to_string()).into());
        }
        if config.max_depth == 0 {
            return Err(ConfigError::Validation("max_depth must be >= 1".to_string()).into());
        }

        let root = RootHost::from_url(&config.seed).ok_or(UrlError::MissingHost)?;
        let state = Arc::new(CrawlState::new(config.seed.clone()));

        let context = Arc::new(WorkerContext {
            state,
            fetcher,
            root,
            max_depth: config.max_depth,
            idle_interval: config.idle_interval,
        });

        Ok(Self { config, context })
    }

    /// The shared crawl state, for inspection
    pub fn state(&self) -> &CrawlState {
        &self.context.state
    }

    /// The host hyperlinks are classified against
    pub fn root_host(&self) -> &RootHost {
        &self.context.root
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Runs the crawl to completion
    ///
    /// Starts `workers` workers and waits for all of them to stop. Fetch
    /// failures never end the run; the only error is a worker task that
    /// panicked, in which case the remaining workers are cancelled.
    pub async fn run(self) -> Result<CrawlReport, ScoutError> {
        let started_at = Utc::now();
        let timer = Instant::now();

        tracing::info!(
            "Crawling {} with {} workers (max depth {})",
            self.config.seed,
            self.config.workers,
            self.config.max_depth
        );

        let mut workers = JoinSet::new();
        for id in 1..=self.config.workers {
            workers.spawn(run_worker(id, Arc::clone(&self.context)));
        }

        let mut totals = WorkerStats::default();
        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(stats) => totals += stats,
                Err(e) => {
                    tracing::error!("Worker task failed: {}", e);
                    return Err(ScoutError::Worker(e.to_string()));
                }
            }
        }

        tracing::info!(
            "Crawl completed: {} pages ({} scraped, {} failed) in {:?}",
            totals.scraped + totals.failed,
            totals.scraped,
            totals.failed,
            timer.elapsed()
        );

        let state = &self.context.state;
        let summary = CrawlSummary {
            seed: self.config.seed.to_string(),
            root_host: self.context.root.to_string(),
            workers: self.config.workers,
            max_depth: self.config.max_depth,
            started_at,
            finished_at: Utc::now(),
            depth_breakdown: state.depth_breakdown(),
            ..CrawlSummary::default()
        };

        Ok(CrawlReport::new(state.pages(), summary))
    }
}
