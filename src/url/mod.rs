//! URL handling module for Sumi-Scout
//!
//! This module provides relative reference resolution and the internal/external
//! classification of hyperlinks against the crawl's root host.

mod resolve;
mod scope;

// Re-export main functions
pub use resolve::{resolve_all, resolve_reference};
pub use scope::{partition_links, LinkScope, RootHost};
