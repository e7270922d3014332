use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Status code error fetching {url}: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to set up log file: {0}")]
    Logging(#[from] tracing_appender::rolling::InitError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No advocate records found at {url}; the page layout may have changed")]
    NoRecords { url: String },
}

pub type Result<T> = std::result::Result<T, ScraperError>;
