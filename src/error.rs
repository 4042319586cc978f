// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuoteError>;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid corpus: {0}")]
    Corpus(String),

    #[error("Failed to read corpus {path}: {source}")]
    CorpusFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
