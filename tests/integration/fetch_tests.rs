//! Integration tests for the HTTP fetcher
//!
//! One request per fetch, statuses >= 400 are errors, and everything else
//! hands back the body text.

use sumi_scout::config::FetchConfig;
use sumi_scout::crawler::{Fetcher, HttpFetcher};
use sumi_scout::FetchError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_fetcher() -> HttpFetcher {
    let config = FetchConfig {
        user_agent: "TestScout/1.0".to_string(),
        timeout: 5,
        connect_timeout: 2,
    };
    HttpFetcher::new(&config).expect("Failed to build fetcher")
}

async fn mount_status(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_returns_body() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, "/page", 200, "<html>hello</html>").await;

    let body = create_test_fetcher()
        .fetch(&format!("{}/page", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(body, "<html>hello</html>");
}

#[tokio::test]
async fn test_fetch_sends_configured_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "TestScout/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = create_test_fetcher()
        .fetch(&format!("{}/", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_client_and_server_errors() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, "/missing", 404, "not found").await;
    mount_status(&mock_server, "/gone", 410, "").await;
    mount_status(&mock_server, "/error", 500, "boom").await;

    let fetcher = create_test_fetcher();

    for (route, expected) in [("/missing", 404), ("/gone", 410), ("/error", 500)] {
        let url = format!("{}{}", mock_server.uri(), route);
        match fetcher.fetch(&url).await {
            Err(FetchError::Status { url: failed, status }) => {
                assert_eq!(status, expected);
                assert_eq!(failed, url);
            }
            other => panic!("expected status error for {}, got {:?}", route, other),
        }
    }
}

#[tokio::test]
async fn test_success_without_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = create_test_fetcher()
        .fetch(&format!("{}/empty", mock_server.uri()))
        .await
        .unwrap();

    assert!(body.is_empty());
}

#[tokio::test]
async fn test_redirect_is_followed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", "/new"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_status(&mock_server, "/new", 200, "moved here").await;

    let body = create_test_fetcher()
        .fetch(&format!("{}/old", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(body, "moved here");
}

#[tokio::test]
async fn test_connection_refused_is_request_error() {
    // Bind then release a port so nothing is listening on it
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let url = format!("http://127.0.0.1:{}/", port);

    let error = create_test_fetcher().fetch(&url).await.unwrap_err();

    assert!(matches!(error, FetchError::Request { .. }), "got {:?}", error);
    assert_eq!(error.url(), url);
}
