//! Depth-bounded crawl engine for fuzzable-URL and email discovery
//!
//! Concurrent layered traversal scoped to a single host. Pages are
//! deduplicated by endpoint shape (query-parameter values stripped), so
//! each distinct endpoint is fetched at most once per crawl regardless
//! of cycles in the target site.

pub mod extractor;
pub mod normalizer;

use crate::error::{ArachneError, Result};
use crate::http::HttpClient;
use crate::models::{CrawlConfig, CrawlResult};
use extractor::Extractor;
use normalizer::UrlNormalizer;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex, Semaphore};
use tracing::{debug, info};
use url::Url;

/// What a single visited page contributed to the crawl
struct PageOutcome {
    /// The page's own URL, when it carries a query string
    fuzzable: Option<String>,
    /// Surviving in-scope links for the next layer
    links: Vec<String>,
}

/// Depth-bounded concurrent crawler scoped to one host origin
pub struct Crawler {
    client: HttpClient,
    extractor: Extractor,
    normalizer: UrlNormalizer,
    host: String,
    host_origin: String,
    max_depth: u32,
    concurrency: usize,
}

impl Crawler {
    /// Creates a crawler for the configured target host. The host is a
    /// bare hostname; the plaintext scheme is prepended to form the seed
    /// origin that scopes the whole crawl.
    pub fn new(config: &CrawlConfig) -> Result<Self> {
        if config.target.is_empty() {
            return Err(ArachneError::ConfigError(
                "no target host given".to_string(),
            ));
        }
        let host_origin = format!("http://{}", config.target);
        Url::parse(&host_origin)?;

        Ok(Self {
            client: HttpClient::from_config(config)?,
            extractor: Extractor::new(),
            normalizer: UrlNormalizer::new(),
            host: config.target.clone(),
            host_origin,
            max_depth: config.max_depth,
            concurrency: config.threads.max(1),
        })
    }

    /// Crawls the target to the configured depth and returns the
    /// discovered emails and fuzzable URLs. The crawl itself never
    /// fails: fetch and parse errors are absorbed where they occur and
    /// an empty result is a normal outcome.
    pub async fn run(&self) -> CrawlResult {
        let mut result = CrawlResult::new(&self.host);
        info!("crawling {} for parameterized URLs", self.host_origin);

        let visited: Arc<Mutex<HashSet<String>>> = Arc::new(Mutex::new(HashSet::new()));
        let emails: Arc<Mutex<HashSet<String>>> = Arc::new(Mutex::new(HashSet::new()));
        let mut fuzzable_urls = Vec::new();

        let mut current_layer = vec![self.host_origin.clone()];
        let mut depth = self.max_depth;

        while depth > 0 && !current_layer.is_empty() {
            let semaphore = Arc::new(Semaphore::new(self.concurrency));
            let (tx, mut rx) = mpsc::channel::<PageOutcome>(current_layer.len() + 1);
            // Links found on the last layer would enter at depth 0 and
            // terminate unvisited, so they are not collected at all.
            let extract_links = depth > 1;

            let mut handles = Vec::new();
            for url in current_layer.drain(..) {
                let sem = Arc::clone(&semaphore);
                let visited = Arc::clone(&visited);
                let emails = Arc::clone(&emails);
                let client = self.client.clone();
                let extractor = self.extractor.clone();
                let normalizer = self.normalizer.clone();
                let host_origin = self.host_origin.clone();
                let tx = tx.clone();

                let handle = tokio::spawn(async move {
                    let _permit = match sem.acquire().await {
                        Ok(p) => p,
                        Err(_) => return,
                    };

                    // Check-then-insert under one lock acquisition:
                    // exactly one task ever visits a given dedup key.
                    let key = normalizer.dedup_key(&url);
                    {
                        let mut seen = visited.lock().await;
                        if !seen.insert(key) {
                            return;
                        }
                    }

                    let mut outcome = PageOutcome {
                        fuzzable: url.contains('?').then(|| url.clone()),
                        links: Vec::new(),
                    };

                    // A failed fetch contributes nothing; the fuzzable
                    // emission above already happened either way.
                    if let Some(body) = fetch_body(&client, &url).await {
                        let found = extractor.extract_emails(&body);
                        if !found.is_empty() {
                            let mut set = emails.lock().await;
                            set.extend(found);
                        }

                        if extract_links {
                            if let Ok(page_url) = Url::parse(&url) {
                                let links = extractor.extract_links(
                                    &normalizer,
                                    &page_url,
                                    &body,
                                    &host_origin,
                                );
                                outcome.links = links.into_values().collect();
                            }
                        }
                    }

                    let _ = tx.send(outcome).await;
                });

                handles.push(handle);
            }

            drop(tx);

            // Single fan-in point: the channel closes once every task of
            // the layer has reported or been skipped.
            let mut next_layer = Vec::new();
            while let Some(outcome) = rx.recv().await {
                if let Some(url) = outcome.fuzzable {
                    info!("fuzzable: {url}");
                    fuzzable_urls.push(url);
                }
                next_layer.extend(outcome.links);
            }

            for handle in handles {
                let _ = handle.await;
            }

            debug!(
                "layer at depth {depth} complete, {} new links",
                next_layer.len()
            );
            current_layer = next_layer;
            depth -= 1;
        }

        if fuzzable_urls.is_empty() {
            info!("no fuzzable urls found");
        }

        {
            let email_set = emails.lock().await;
            result.emails = email_set.iter().cloned().collect();
        }
        result.emails.sort();
        result.fuzzable_urls = fuzzable_urls;
        result.total_requests = self.client.request_count();
        result.finish();

        info!(
            "crawl finished: {} fuzzable URLs, {} emails, {} requests",
            result.fuzzable_urls.len(),
            result.emails.len(),
            result.total_requests
        );
        result
    }
}

/// Fetches a page body, absorbing any transport failure as "no content"
async fn fetch_body(client: &HttpClient, url: &str) -> Option<String> {
    match client.get(url).await {
        Ok(response) => response.text().await.ok(),
        Err(e) => {
            debug!("fetch failed for {url}: {e}");
            None
        }
    }
}
