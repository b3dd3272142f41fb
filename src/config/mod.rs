//! Configuration module for Sumi-Scout
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file, and validating the start URL given on the command line.
//!
//! # Example
//!
//! ```no_run
//! use sumi_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scout.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, FetchConfig, OutputConfig, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_IDLE_INTERVAL_MS, DEFAULT_MAX_DEPTH, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    DEFAULT_WORKERS,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};

// Re-export validation functions
pub use validation::{prepare_start_url, validate, MAX_START_URL_LEN, MIN_START_URL_LEN};
