//! URL canonicalization and link resolution

use regex::Regex;
use url::Url;

/// Collapses URLs into visitation keys so that endpoints differing only
/// in query-parameter values are crawled once.
#[derive(Clone)]
pub struct UrlNormalizer {
    query_values: Regex,
}

impl UrlNormalizer {
    pub fn new() -> Self {
        Self {
            // "?id=5&x=foo" becomes "?id=id&x=x": each parameter value is
            // replaced by its own name, so the key depends on the endpoint
            // shape rather than the concrete values.
            query_values: Regex::new(r"([?&])([^=&]+)=([^&]+)").expect("query-value pattern"),
        }
    }

    /// Returns the dedup key for a URL. URLs without a query string pass
    /// through unchanged.
    pub fn dedup_key(&self, url: &str) -> String {
        self.query_values
            .replace_all(url, "${1}${2}=${2}")
            .into_owned()
    }
}

/// Resolves a candidate href against the page it appeared on.
///
/// Absolute candidates are rejected outright, including same-host ones:
/// only relative, root-relative, and scheme-relative links are followed.
/// The resolved URL must stay inside `host_origin` or it is discarded.
pub fn resolve(base: &Url, candidate: &str, host_origin: &str) -> Option<String> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Anything that already parses on its own is absolute; this also
    // drops mailto:, tel:, javascript: and data: candidates.
    if Url::parse(trimmed).is_ok() {
        return None;
    }

    // join() covers "/", "//host/path" and plain relative references;
    // the scheme-relative form inherits the base's plaintext scheme.
    let mut resolved = base.join(trimmed).ok()?;
    resolved.set_fragment(None);

    let absolute = resolved.to_string();
    if absolute.contains(host_origin) {
        Some(absolute)
    } else {
        None
    }
}
