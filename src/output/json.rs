use crate::output::report::CrawlReport;
use crate::output::traits::{OutputResult, ReportFormatter};

/// Renders the report as indented JSON: `{"pages": {url: page, ...}}`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &CrawlReport) -> OutputResult<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
