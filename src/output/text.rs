//! Plain-text listing of every scraped page

use crate::output::report::CrawlReport;
use crate::output::traits::{OutputResult, ReportFormatter};

/// Lists each scraped page's references, one block per page
///
/// Pages whose fetch failed are left out.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &CrawlReport) -> OutputResult<String> {
        let mut out = String::from("Results\n\n");

        for page in report.pages.values().filter(|page| page.scraped) {
            out.push_str(&format!("URL: {}\n\n", page.url));

            push_list(&mut out, "Scripts", &page.scripts);
            push_list(&mut out, "CSS Links", &page.css_links);
            push_list(&mut out, "Images", &page.images);
            push_list(&mut out, "External Links", &page.external_links);
            push_list(&mut out, "Internal Links", &page.internal_links);
        }

        Ok(out)
    }
}

fn push_list(out: &mut String, title: &str, items: &[String]) {
    out.push_str(&format!("  {}:\n", title));
    for item in items {
        out.push_str(&format!("    {}\n", item));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::CrawlSummary;
    use crate::state::Page;
    use std::collections::BTreeMap;

    #[test]
    fn test_text_lists_scraped_pages_only() {
        let mut ok = Page::failed("http://localhost:9000/");
        ok.scraped = true;
        ok.scripts.push("http://localhost:9000/app.js".to_string());
        ok.external_links.push("https://github.com/".to_string());
        let failed = Page::failed("http://localhost:9000/gone");

        let mut pages = BTreeMap::new();
        pages.insert(ok.url.clone(), ok);
        pages.insert(failed.url.clone(), failed);
        let report = CrawlReport::new(pages, CrawlSummary::new());

        let text = TextFormatter.format(&report).unwrap();

        assert!(text.starts_with("Results\n\nURL: http://localhost:9000/\n\n"));
        assert!(text.contains("  Scripts:\n    http://localhost:9000/app.js\n\n"));
        assert!(text.contains("  External Links:\n    https://github.com/\n\n"));
        assert!(text.contains("  Internal Links:\n\n"));
        assert!(!text.contains("/gone"));
    }
}
