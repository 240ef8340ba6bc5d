//! Core data models for the arachne crawler

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Configuration for a crawl session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Target host (bare hostname, no scheme)
    pub target: String,
    /// Maximum crawl depth; 0 yields an immediate empty result
    pub max_depth: u32,
    /// Number of concurrent fetch tasks
    pub threads: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            target: String::new(),
            max_depth: 3,
            threads: 10,
            timeout_secs: 30,
            user_agent: "Mozilla/5.0 (compatible; Arachne/0.1)".to_string(),
        }
    }
}

/// Result of a complete crawl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlResult {
    /// Target host
    pub target: String,
    /// Unique crawl identifier
    pub crawl_id: String,
    /// Crawl start time (local timezone)
    pub started_at: DateTime<Local>,
    /// Crawl end time (local timezone)
    pub finished_at: Option<DateTime<Local>>,
    /// Email addresses harvested from page bodies, deduplicated and sorted
    pub emails: Vec<String>,
    /// Discovered URLs carrying a query string, in arrival order
    pub fuzzable_urls: Vec<String>,
    /// Total HTTP requests made
    pub total_requests: u64,
}

impl CrawlResult {
    /// Creates a new CrawlResult
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            crawl_id: uuid::Uuid::new_v4().to_string(),
            started_at: Local::now(),
            finished_at: None,
            emails: Vec::new(),
            fuzzable_urls: Vec::new(),
            total_requests: 0,
        }
    }

    /// Marks the crawl as finished
    pub fn finish(&mut self) {
        self.finished_at = Some(Local::now());
    }
}
