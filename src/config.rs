//! Configuration loading for the arachne crawler

use crate::error::{ArachneError, Result};
use crate::models::CrawlConfig;
use serde::Deserialize;
use std::path::Path;

/// File-based configuration structure matching config/default.toml
#[derive(Debug, Deserialize)]
struct FileConfig {
    crawl: Option<CrawlSection>,
}

#[derive(Debug, Deserialize)]
struct CrawlSection {
    threads: Option<usize>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
    max_depth: Option<u32>,
}

/// Loads configuration from a TOML file and merges with defaults
pub fn load_config(path: &Path) -> Result<CrawlConfig> {
    let content = std::fs::read_to_string(path).map_err(ArachneError::IoError)?;
    let file_config: FileConfig = toml::from_str(&content)?;

    let mut config = CrawlConfig::default();

    if let Some(crawl) = file_config.crawl {
        if let Some(threads) = crawl.threads {
            config.threads = threads;
        }
        if let Some(timeout) = crawl.timeout_secs {
            config.timeout_secs = timeout;
        }
        if let Some(ua) = crawl.user_agent {
            config.user_agent = ua;
        }
        if let Some(depth) = crawl.max_depth {
            config.max_depth = depth;
        }
    }

    Ok(config)
}

/// Merges CLI arguments into an existing CrawlConfig; CLI values win
/// over anything the file set.
pub fn merge_cli_args(
    config: &mut CrawlConfig,
    target: String,
    depth: Option<u32>,
    threads: Option<usize>,
    timeout: Option<u64>,
    user_agent: Option<String>,
) {
    config.target = target;

    if let Some(d) = depth {
        config.max_depth = d;
    }
    if let Some(t) = threads {
        config.threads = t;
    }
    if let Some(t) = timeout {
        config.timeout_secs = t;
    }
    if let Some(ua) = user_agent {
        config.user_agent = ua;
    }
}
