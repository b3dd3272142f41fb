//! Output module for rendering crawl results
//!
//! This module handles:
//! - The crawl report and its summary statistics
//! - Rendering the report as JSON, plain text, or a markdown summary
//! - Writing the rendered report to a file or stdout

mod json;
mod markdown;
mod report;
mod text;
mod traits;

pub use json::JsonFormatter;
pub use markdown::{format_markdown_summary, MarkdownFormatter};
pub use report::{CrawlReport, CrawlSummary};
pub use text::TextFormatter;
pub use traits::{OutputError, OutputResult, ReportFormatter};

use serde::Deserialize;
use std::io::Write;
use std::path::Path;

/// Report formats selectable from the command line or config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{"pages": {...}}`, keyed by URL
    #[default]
    Json,
    /// Reference lists for every scraped page
    Text,
    /// Summary document with statistics
    Markdown,
}

impl OutputFormat {
    /// The formatter that renders this format
    pub fn formatter(self) -> Box<dyn ReportFormatter> {
        match self {
            Self::Json => Box::new(JsonFormatter),
            Self::Text => Box::new(TextFormatter),
            Self::Markdown => Box::new(MarkdownFormatter),
        }
    }
}

/// Renders a report in the given format
pub fn render(report: &CrawlReport, format: OutputFormat) -> OutputResult<String> {
    format.formatter().format(report)
}

/// Renders a report and writes it to `path`, or to stdout when `path` is None
///
/// # Arguments
///
/// * `report` - The finished crawl
/// * `format` - The output format
/// * `path` - Destination file; stdout when None
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(OutputError)` - Failed to render or write the report
pub fn write_report(
    report: &CrawlReport,
    format: OutputFormat,
    path: Option<&Path>,
) -> OutputResult<()> {
    let mut rendered = render(report, format)?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    match path {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
