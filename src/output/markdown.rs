//! Markdown summary generation
//!
//! This module generates a human-readable markdown summary of a crawl,
//! including run information, statistics, failed pages and external links.

use crate::output::report::CrawlReport;
use crate::output::traits::{OutputResult, ReportFormatter};

/// How many external links are listed before the rest are elided
const EXTERNAL_LINK_LIMIT: usize = 50;

/// Renders the crawl summary as a markdown document
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &CrawlReport) -> OutputResult<String> {
        Ok(format_markdown_summary(report))
    }
}

/// Formats a crawl report as markdown
///
/// # Arguments
///
/// * `report` - The finished crawl
///
/// # Returns
///
/// A formatted markdown string
pub fn format_markdown_summary(report: &CrawlReport) -> String {
    let summary = &report.summary;
    let mut md = String::new();

    // Title
    md.push_str("# Sumi-Scout Crawl Summary\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Seed**: {}\n", summary.seed));
    md.push_str(&format!("- **Root Host**: {}\n", summary.root_host));
    md.push_str(&format!("- **Workers**: {}\n", summary.workers));
    md.push_str(&format!("- **Max Depth**: {}\n", summary.max_depth));
    md.push_str(&format!("- **Started**: {}\n", summary.started_at.to_rfc3339()));
    md.push_str(&format!("- **Finished**: {}\n", summary.finished_at.to_rfc3339()));
    md.push_str(&format!(
        "- **Duration**: {:.2} seconds\n",
        summary.duration().num_milliseconds() as f64 / 1000.0
    ));
    if let Some(hash) = &summary.config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push('\n');

    // Overall statistics
    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!("- **Total Pages**: {}\n", summary.total_pages()));
    md.push_str(&format!("- **Scraped**: {}\n", summary.pages_scraped));
    md.push_str(&format!("- **Failed**: {}\n", summary.pages_failed));
    md.push_str(&format!(
        "- **Success Rate**: {:.2}%\n\n",
        summary.success_rate()
    ));

    // Reference breakdown
    md.push_str("## References Found\n\n");
    md.push_str("| Kind | Count |\n");
    md.push_str("|------|-------|\n");
    md.push_str(&format!("| Scripts | {} |\n", summary.total_scripts));
    md.push_str(&format!("| Images | {} |\n", summary.total_images));
    md.push_str(&format!("| CSS Links | {} |\n", summary.total_css_links));
    md.push_str(&format!(
        "| Internal Links | {} |\n",
        summary.total_internal_links
    ));
    md.push_str(&format!(
        "| External Links | {} |\n\n",
        summary.total_external_links
    ));

    // Depth breakdown
    if !summary.depth_breakdown.is_empty() {
        md.push_str("## Depth Breakdown\n\n");
        md.push_str("| Depth | Pages |\n");
        md.push_str("|-------|-------|\n");
        for (depth, count) in &summary.depth_breakdown {
            md.push_str(&format!("| {} | {} |\n", depth, count));
        }
        md.push('\n');
    }

    // Failed pages
    if !summary.failed_pages.is_empty() {
        md.push_str("## Failed Pages\n\n");
        for url in &summary.failed_pages {
            md.push_str(&format!("- {}\n", url));
        }
        md.push('\n');
    }

    // External links
    if !summary.external_links.is_empty() {
        md.push_str("## External Links\n\n");
        md.push_str(&format!(
            "Distinct external links: {}\n\n",
            summary.external_links.len()
        ));
        for link in summary.external_links.iter().take(EXTERNAL_LINK_LIMIT) {
            md.push_str(&format!("- {}\n", link));
        }
        if summary.external_links.len() > EXTERNAL_LINK_LIMIT {
            md.push_str(&format!(
                "\n... and {} more\n",
                summary.external_links.len() - EXTERNAL_LINK_LIMIT
            ));
        }
        md.push('\n');
    }

    md
}
