use crate::output::OutputFormat;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Number of workers when neither the command line nor the file sets one
pub const DEFAULT_WORKERS: usize = 2;

/// Maximum depth when neither the command line nor the file sets one
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// How long an idle worker waits before polling the frontier again (ms)
pub const DEFAULT_IDLE_INTERVAL_MS: u64 = 200;

/// Whole-request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection timeout (seconds)
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("sumi-scout/", env!("CARGO_PKG_VERSION"));

/// Main configuration structure for Sumi-Scout
///
/// Every section is optional in the TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub fetch: FetchConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrawlerConfig {
    /// Number of concurrent workers
    pub workers: usize,

    /// Maximum discovery depth that still gets its links followed
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Sleep between polls when the frontier is momentarily empty (milliseconds)
    #[serde(rename = "idle-interval")]
    pub idle_interval: u64,
}

impl CrawlerConfig {
    pub fn idle_interval(&self) -> Duration {
        Duration::from_millis(self.idle_interval)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            max_depth: DEFAULT_MAX_DEPTH,
            idle_interval: DEFAULT_IDLE_INTERVAL_MS,
        }
    }
}

/// HTTP fetch configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig {
    /// User-Agent header value
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout (seconds)
    pub timeout: u64,

    /// Connection timeout (seconds)
    #[serde(rename = "connect-timeout")]
    pub connect_timeout: u64,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Report format
    pub format: OutputFormat,

    /// Where to write the report; stdout when unset
    pub path: Option<PathBuf>,
}
