//! Integration tests for the crawl engine

mod common;

use arachne::crawler::Crawler;
use common::test_config;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create an HTML response with correct Content-Type.
fn html_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html")
}

#[tokio::test]
async fn test_discovers_fuzzable_urls() {
    let mock_server = MockServer::start().await;

    let root_html = r#"<html><body>
        <a href="/search?q=1">Search</a>
        <a href="/about">About</a>
    </body></html>"#;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(root_html))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(html_response("<html><body>results</body></html>"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(html_response("<html><body>about</body></html>"))
        .mount(&mock_server)
        .await;

    let crawler = Crawler::new(&test_config(&mock_server.uri(), 2)).expect("crawler");
    let result = crawler.run().await;

    assert_eq!(result.fuzzable_urls.len(), 1, "got {:?}", result.fuzzable_urls);
    assert!(result.fuzzable_urls[0].ends_with("/search?q=1"));
}

#[tokio::test]
async fn test_depth_zero_yields_empty_result() {
    let mock_server = MockServer::start().await;

    let crawler = Crawler::new(&test_config(&mock_server.uri(), 0)).expect("crawler");
    let result = crawler.run().await;

    assert!(result.emails.is_empty());
    assert!(result.fuzzable_urls.is_empty());
    assert_eq!(result.total_requests, 0);
}

#[tokio::test]
async fn test_endpoint_shape_fetched_once() {
    let mock_server = MockServer::start().await;

    // Two links to the same endpoint shape, differing only in the value
    // of `id`: only one representative is ever visited.
    let root_html = r#"<html><body>
        <a href="/item?id=1">one</a>
        <a href="/item?id=2">two</a>
    </body></html>"#;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(root_html))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/item"))
        .respond_with(html_response("<html><body>item</body></html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let crawler = Crawler::new(&test_config(&mock_server.uri(), 2)).expect("crawler");
    let result = crawler.run().await;

    assert_eq!(result.fuzzable_urls.len(), 1, "got {:?}", result.fuzzable_urls);
}

#[tokio::test]
async fn test_cycle_terminates_and_fetches_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(r#"<a href="/a">a</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(html_response(r#"<a href="/b">b</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(html_response(r#"<a href="/a">back</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let crawler = Crawler::new(&test_config(&mock_server.uri(), 5)).expect("crawler");
    let result = crawler.run().await;

    assert_eq!(result.total_requests, 3);
}

#[tokio::test]
async fn test_email_reported_once_across_parents() {
    let mock_server = MockServer::start().await;

    let root_html = r#"<html><body>
        <a href="/p1">p1</a>
        <a href="/p2">p2</a>
    </body></html>"#;
    let parent_html = r#"<html><body>
        Reach us at a.b+tag@example.co.uk any time.
        <a href="/contact">contact</a>
    </body></html>"#;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(root_html))
        .mount(&mock_server)
        .await;

    for p in ["/p1", "/p2"] {
        Mock::given(method("GET"))
            .and(path(p))
            .respond_with(html_response(parent_html))
            .mount(&mock_server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(html_response(
            "<html><body>Contact: a.b+tag@example.co.uk for info</body></html>",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let crawler = Crawler::new(&test_config(&mock_server.uri(), 3)).expect("crawler");
    let result = crawler.run().await;

    assert_eq!(result.emails, vec!["a.b+tag@example.co.uk".to_string()]);
}

#[tokio::test]
async fn test_out_of_scope_links_never_fetched() {
    let mock_server = MockServer::start().await;

    // Absolute links are out of scope even on the same host, and
    // scheme-relative links to other hosts fail the origin check.
    let root_html = format!(
        r#"<html><body>
            <a href="{}/abs">same-host absolute</a>
            <a href="//external.example.org/page">external</a>
        </body></html>"#,
        mock_server.uri()
    );

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(&root_html))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/abs"))
        .respond_with(html_response("<html><body>abs</body></html>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let crawler = Crawler::new(&test_config(&mock_server.uri(), 3)).expect("crawler");
    let result = crawler.run().await;

    assert_eq!(result.total_requests, 1);
    assert!(result.fuzzable_urls.is_empty());
}

#[tokio::test]
async fn test_depth_bound_stops_traversal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(r#"<a href="/l1?p=1">l1</a>"#))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/l1"))
        .respond_with(html_response(r#"<a href="/l2?p=2">l2</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/l2"))
        .respond_with(html_response("<html><body>deep</body></html>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let crawler = Crawler::new(&test_config(&mock_server.uri(), 2)).expect("crawler");
    let result = crawler.run().await;

    assert_eq!(result.fuzzable_urls.len(), 1, "got {:?}", result.fuzzable_urls);
    assert!(result.fuzzable_urls[0].ends_with("/l1?p=1"));
}

#[tokio::test]
async fn test_failed_fetch_contributes_nothing() {
    let mock_server = MockServer::start().await;

    let root_html = r#"<html><body>
        <a href="/boom">broken</a>
        <a href="/search?q=5">fine</a>
    </body></html>"#;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(root_html))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/boom"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(html_response("<html><body>results</body></html>"))
        .mount(&mock_server)
        .await;

    let crawler = Crawler::new(&test_config(&mock_server.uri(), 2)).expect("crawler");
    let result = crawler.run().await;

    assert_eq!(result.fuzzable_urls.len(), 1, "got {:?}", result.fuzzable_urls);
    assert!(result.fuzzable_urls[0].ends_with("/search?q=5"));
}

#[tokio::test]
async fn test_requests_carry_the_tool_signature() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "Arachne-Test/0.1.0"))
        .respond_with(html_response("<html><body>hello</body></html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let crawler = Crawler::new(&test_config(&mock_server.uri(), 1)).expect("crawler");
    let result = crawler.run().await;

    assert_eq!(result.total_requests, 1);
}
