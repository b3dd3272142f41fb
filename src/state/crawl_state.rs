//! Shared crawl state
//!
//! Every URL the crawl learns about lives in exactly one of three sets:
//!
//! - `remaining`: discovered, not yet claimed by a worker
//! - `pending`: claimed by a worker, fetch in flight
//! - `completed`: processed, with its `Page`
//!
//! A URL only ever moves remaining -> pending -> completed. All three sets sit
//! behind a single `RwLock`; every operation that mutates them takes the write
//! side for its whole read-check-write sequence, and no I/O ever happens while
//! the lock is held.

use crate::state::Page;
use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use url::Url;

/// A discovered URL and the depth it was first discovered at
///
/// The seed has depth 1. A record's depth is never revised, even if the URL
/// later turns up closer to the seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub url: Url,
    pub depth: u32,
}

impl UrlRecord {
    pub fn new(url: Url, depth: u32) -> Self {
        Self { url, depth }
    }

    /// The key this record is stored under
    pub fn key(&self) -> &str {
        self.url.as_str()
    }
}

/// Sizes of the three sets at one instant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateCounts {
    pub remaining: usize,
    pub pending: usize,
    pub completed: usize,
}

#[derive(Debug)]
struct CompletedPage {
    depth: u32,
    page: Page,
}

#[derive(Debug, Default)]
struct UrlSets {
    remaining: HashMap<String, UrlRecord>,
    pending: HashMap<String, UrlRecord>,
    completed: HashMap<String, CompletedPage>,
}

impl UrlSets {
    fn is_known(&self, url: &str) -> bool {
        self.remaining.contains_key(url)
            || self.pending.contains_key(url)
            || self.completed.contains_key(url)
    }

    fn enqueue_if_new(&mut self, url: Url, depth: u32) -> bool {
        if self.is_known(url.as_str()) {
            return false;
        }
        let record = UrlRecord::new(url, depth);
        self.remaining.insert(record.key().to_string(), record);
        true
    }

    fn complete(&mut self, url: &str, page: Page) -> Option<u32> {
        let record = self.pending.remove(url)?;
        self.completed.insert(
            url.to_string(),
            CompletedPage {
                depth: record.depth,
                page,
            },
        );
        Some(record.depth)
    }
}

/// The crawl's shared frontier and results
///
/// Callers only see the atomic operations below; the locking discipline is
/// not reachable from outside this type.
#[derive(Debug)]
pub struct CrawlState {
    sets: RwLock<UrlSets>,
}

impl CrawlState {
    /// Creates the state for a new crawl with `seed` remaining at depth 1
    pub fn new(seed: Url) -> Self {
        let mut sets = UrlSets::default();
        sets.enqueue_if_new(seed, 1);
        Self {
            sets: RwLock::new(sets),
        }
    }

    // A panicking holder can only have been between whole operations on
    // plain maps, so a poisoned lock still guards consistent sets.
    fn read(&self) -> RwLockReadGuard<'_, UrlSets> {
        self.sets.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, UrlSets> {
        self.sets.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns true once nothing is remaining and nothing is in flight
    ///
    /// Only workers holding a pending URL ever enqueue, so once this is true
    /// it stays true.
    pub fn is_exhausted(&self) -> bool {
        let sets = self.read();
        sets.remaining.is_empty() && sets.pending.is_empty()
    }

    /// Claims an arbitrary remaining URL, moving it to pending
    ///
    /// No ordering is guaranteed. `None` only means the frontier is empty at
    /// this instant; other workers may still be about to add to it.
    pub fn claim_next(&self) -> Option<UrlRecord> {
        let mut sets = self.write();
        let key = sets.remaining.keys().next()?.clone();
        let record = sets.remaining.remove(&key)?;
        sets.pending.insert(key, record.clone());
        Some(record)
    }

    /// Records the result for a claimed URL, moving it to completed
    ///
    /// Returns false, and records nothing, if `url` was not pending.
    pub fn complete(&self, url: &str, page: Page) -> bool {
        let completed = self.write().complete(url, page).is_some();
        if !completed {
            tracing::warn!("Ignoring result for {} which was not claimed", url);
        }
        completed
    }

    /// Adds `url` to the frontier unless it is already known
    ///
    /// This is the crawl's only deduplication gate: a URL present in any of
    /// the three sets is rejected. Returns true if the URL was inserted.
    pub fn enqueue_if_new(&self, url: Url, depth: u32) -> bool {
        self.write().enqueue_if_new(url, depth)
    }

    /// Completes a claimed URL and enqueues the links discovered on it
    ///
    /// Both happen in one exclusive section, so the discovered links are in
    /// the frontier before the claimed URL stops counting as in flight.
    /// Links are enqueued at the record's depth + 1. Returns how many links
    /// were new.
    pub fn complete_and_expand(&self, record: &UrlRecord, page: Page, links: Vec<Url>) -> usize {
        let mut sets = self.write();
        if sets.complete(record.key(), page).is_none() {
            drop(sets);
            tracing::warn!("Ignoring result for {} which was not claimed", record.url);
            return 0;
        }

        let next_depth = record.depth + 1;
        let mut added = 0;
        for link in links {
            if sets.enqueue_if_new(link, next_depth) {
                added += 1;
            }
        }
        added
    }

    /// Current sizes of the remaining, pending and completed sets
    pub fn counts(&self) -> StateCounts {
        let sets = self.read();
        StateCounts {
            remaining: sets.remaining.len(),
            pending: sets.pending.len(),
            completed: sets.completed.len(),
        }
    }

    /// Copies out the completed pages, keyed and sorted by URL
    pub fn pages(&self) -> BTreeMap<String, Page> {
        self.read()
            .completed
            .iter()
            .map(|(url, completed)| (url.clone(), completed.page.clone()))
            .collect()
    }

    /// Number of completed pages per discovery depth
    pub fn depth_breakdown(&self) -> BTreeMap<u32, u64> {
        let mut breakdown = BTreeMap::new();
        for completed in self.read().completed.values() {
            *breakdown.entry(completed.depth).or_insert(0) += 1;
        }
        breakdown
    }
}
