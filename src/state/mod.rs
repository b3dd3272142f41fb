//! State module for tracking crawl progress
//!
//! This module provides the shared crawl state every worker operates on, and
//! the per-URL results it accumulates.
//!
//! # Components
//!
//! - `CrawlState`: The remaining/pending/completed URL sets behind one lock
//! - `UrlRecord`: A discovered URL and the depth it was first seen at
//! - `Page`: The references extracted from one processed URL

mod crawl_state;
mod page;

// Re-export main types
pub use crawl_state::{CrawlState, StateCounts, UrlRecord};
pub use page::Page;
