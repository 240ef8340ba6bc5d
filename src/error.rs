//! Error types for the arachne crawler

use thiserror::Error;

/// Main error type for arachne operations
#[derive(Debug, Error)]
pub enum ArachneError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for arachne operations
pub type Result<T> = std::result::Result<T, ArachneError>;
