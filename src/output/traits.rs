//! Output formatter trait and error types

use crate::output::report::CrawlReport;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for report formatters
///
/// A formatter turns a finished crawl into the text written to stdout or to
/// the configured output file.
pub trait ReportFormatter {
    /// Renders the whole report
    ///
    /// # Arguments
    ///
    /// * `report` - The finished crawl
    ///
    /// # Returns
    ///
    /// The rendered document, without a guaranteed trailing newline
    fn format(&self, report: &CrawlReport) -> OutputResult<String>;
}
