//! Common test utilities

use arachne::models::CrawlConfig;

/// Strips the scheme from a wiremock server URI, leaving the bare
/// host:port the crawler expects as its target.
pub fn host_of(uri: &str) -> String {
    uri.trim_start_matches("http://").to_string()
}

/// Creates a test CrawlConfig pointing at a wiremock server
pub fn test_config(uri: &str, max_depth: u32) -> CrawlConfig {
    CrawlConfig {
        target: host_of(uri),
        max_depth,
        threads: 2,
        timeout_secs: 10,
        user_agent: "Arachne-Test/0.1.0".to_string(),
    }
}
