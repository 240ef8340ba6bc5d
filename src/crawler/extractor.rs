//! Link and email extraction from raw page bodies
//!
//! Pattern-based scanning over the raw markup; no DOM is ever built.

use crate::crawler::normalizer::{self, UrlNormalizer};
use regex::Regex;
use std::collections::HashMap;
use url::Url;

/// Extracts candidate links and email-shaped substrings from page bodies
#[derive(Clone)]
pub struct Extractor {
    href: Regex,
    email: Regex,
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            // [^>] spans newlines, so a tag broken across lines still
            // matches, and attributes before href do not matter.
            href: Regex::new(r#"<a\s[^>]*?href="([^"]*)""#).expect("href pattern"),
            email: Regex::new(r"\w+([-+.]\w+)*@\w+([-.]\w+)*\.\w+([-.]\w+)*")
                .expect("email pattern"),
        }
    }

    /// Scans a body for anchor hrefs and returns at most one absolute
    /// in-scope URL per dedup key. Last match wins on key collision;
    /// only one representative per key is ever crawled anyway.
    pub fn extract_links(
        &self,
        normalizer: &UrlNormalizer,
        page_url: &Url,
        body: &str,
        host_origin: &str,
    ) -> HashMap<String, String> {
        let mut links = HashMap::new();
        for cap in self.href.captures_iter(body) {
            if let Some(candidate) = cap.get(1) {
                if let Some(absolute) =
                    normalizer::resolve(page_url, candidate.as_str(), host_origin)
                {
                    links.insert(normalizer.dedup_key(&absolute), absolute);
                }
            }
        }
        links
    }

    /// Scans a body for email-shaped substrings. Duplicates are emitted
    /// as-is; the shared email set deduplicates across the whole crawl.
    pub fn extract_emails(&self, body: &str) -> Vec<String> {
        self.email
            .find_iter(body)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
