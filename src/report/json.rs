//! JSON crawl report export

use crate::error::Result;
use crate::models::CrawlResult;
use std::path::Path;
use tracing::info;

/// Exports crawl results as a JSON file
pub fn export(result: &CrawlResult, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(output_path, json)?;
    info!("JSON report saved to {}", output_path.display());
    Ok(())
}

/// Loads a CrawlResult from a JSON file
pub fn load(input_path: &Path) -> Result<CrawlResult> {
    let content = std::fs::read_to_string(input_path)?;
    let result: CrawlResult = serde_json::from_str(&content)?;
    Ok(result)
}
