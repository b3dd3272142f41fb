//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use std::collections::BTreeMap;
use sumi_scout::config::{prepare_start_url, Config};
use sumi_scout::crawler::crawl;
use sumi_scout::output::{write_report, OutputFormat};
use sumi_scout::CrawlReport;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INDEX_HTML: &str = include_str!("../fixtures/index.html");
const ABOUT_HTML: &str = include_str!("../fixtures/about.html");

/// Creates a test configuration with a short idle interval
fn create_test_config(workers: usize, max_depth: u32) -> Config {
    let mut config = Config::default();
    config.crawler.workers = workers;
    config.crawler.max_depth = max_depth;
    config.crawler.idle_interval = 10; // Very short for testing
    config.fetch.timeout = 5;
    config.fetch.connect_timeout = 2;
    config
}

/// Mounts a page that must be requested exactly `times` times
async fn mount_page(server: &MockServer, route: &str, body: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(times)
        .mount(server)
        .await;
}

async fn run_crawl(server: &MockServer, start: &str, config: &Config) -> CrawlReport {
    let seed = prepare_start_url(&format!("{}{}", server.uri(), start))
        .expect("Failed to prepare start URL");
    crawl(seed, config).await.expect("Crawl failed")
}

/// Report keys relative to the mock server
fn paths(report: &CrawlReport, base_url: &str) -> Vec<String> {
    report
        .pages
        .keys()
        .map(|url| url.trim_start_matches(base_url).to_string())
        .collect()
}

#[tokio::test]
async fn test_fixture_site_scenario() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/index.html", INDEX_HTML, 1).await;
    mount_page(&mock_server, "/about.html", ABOUT_HTML, 1).await;

    // Linked from about.html, which sits at max depth
    mount_page(&mock_server, "/team/contact.html", "", 0).await;

    let report = run_crawl(&mock_server, "/index.html", &create_test_config(2, 2)).await;

    assert_eq!(paths(&report, &base_url), vec!["/about.html", "/index.html"]);

    let index = &report.pages[&format!("{}/index.html", base_url)];
    assert!(index.scraped);
    assert_eq!(index.scripts, vec![format!("{}/js/app.js", base_url)]);
    assert_eq!(index.css_links, vec![format!("{}/css/site.css", base_url)]);
    assert_eq!(index.images, vec![format!("{}/img/logo.png", base_url)]);
    assert_eq!(index.internal_links, vec![format!("{}/about.html", base_url)]);
    assert_eq!(index.external_links, vec!["https://github.com/"]);

    let about = &report.pages[&format!("{}/about.html", base_url)];
    assert_eq!(
        about.internal_links,
        vec![
            format!("{}/index.html", base_url),
            format!("{}/team/contact.html", base_url)
        ]
    );
    assert_eq!(about.images, vec![format!("{}/img/team.jpg", base_url)]);

    // Assets and the external page are recorded, never requested
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    assert_eq!(report.summary.pages_scraped, 2);
    assert_eq!(report.summary.external_links, vec!["https://github.com/"]);
    assert_eq!(report.summary.depth_breakdown, BTreeMap::from([(1, 1), (2, 1)]));
}

#[tokio::test]
async fn test_max_depth_one_crawls_only_seed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/index.html", INDEX_HTML, 1).await;
    mount_page(&mock_server, "/about.html", ABOUT_HTML, 0).await;

    let report = run_crawl(&mock_server, "/index.html", &create_test_config(3, 1)).await;

    assert_eq!(paths(&report, &base_url), vec!["/index.html"]);
    let index = &report.pages[&format!("{}/index.html", base_url)];
    assert_eq!(index.internal_links, vec![format!("{}/about.html", base_url)]);
}

#[tokio::test]
async fn test_failed_page_does_not_stop_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let index = r#"<a href="/admin">Admin</a> <a href="/broken">Broken</a> <a href="/about.html">About</a>"#;
    mount_page(&mock_server, "/", index, 1).await;
    mount_page(&mock_server, "/about.html", ABOUT_HTML, 1).await;

    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = run_crawl(&mock_server, "/", &create_test_config(2, 2)).await;

    assert_eq!(
        paths(&report, &base_url),
        vec!["/", "/about.html", "/admin", "/broken"]
    );

    for failed in ["/admin", "/broken"] {
        let page = &report.pages[&format!("{}{}", base_url, failed)];
        assert!(!page.scraped, "{} should have failed", failed);
        assert_eq!(page.reference_count(), 0);
    }

    assert!(report.pages[&format!("{}/about.html", base_url)].scraped);
    assert_eq!(report.summary.pages_failed, 2);
    assert_eq!(report.summary.pages_scraped, 2);
}

#[tokio::test]
async fn test_cyclic_links_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Every page links to every page, itself included, by absolute URL
    let body: String = ["/", "/a", "/b", "/c"]
        .iter()
        .map(|route| format!(r#"<a href="{}{}">{}</a>"#, base_url, route, route))
        .collect();

    for route in ["/", "/a", "/b", "/c"] {
        mount_page(&mock_server, route, &body, 1).await;
    }

    let report = run_crawl(&mock_server, "/", &create_test_config(8, 10)).await;

    assert_eq!(paths(&report, &base_url), vec!["/", "/a", "/b", "/c"]);
    assert!(report.pages.values().all(|page| page.scraped));
}

#[tokio::test]
async fn test_unreachable_seed_terminates() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = run_crawl(&mock_server, "/", &create_test_config(4, 5)).await;

    assert_eq!(paths(&report, &base_url), vec!["/"]);
    assert!(!report.pages[&format!("{}/", base_url)].scraped);
}

#[tokio::test]
async fn test_json_report_written_to_file() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/index.html", INDEX_HTML, 1).await;
    mount_page(&mock_server, "/about.html", ABOUT_HTML, 1).await;

    let report = run_crawl(&mock_server, "/index.html", &create_test_config(2, 2)).await;

    let dir = tempdir().unwrap();
    let output = dir.path().join("results.json");
    write_report(&report, OutputFormat::Json, Some(&output)).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();

    let pages = value["pages"].as_object().unwrap();
    assert_eq!(pages.len(), 2);

    let index = &pages[&format!("{}/index.html", base_url)];
    assert_eq!(index["url"], format!("{}/index.html", base_url));
    assert_eq!(index["scraped"], true);
    assert_eq!(index["cssLinks"][0], format!("{}/css/site.css", base_url));
    assert_eq!(index["externalLinks"][0], "https://github.com/");
    assert_eq!(index["internalLinks"].as_array().unwrap().len(), 1);
}
