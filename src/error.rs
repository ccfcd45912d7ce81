use reqwest::StatusCode;
use thiserror::Error;

use crate::cards::bucket::Bucket;

/// Failures while pulling the Scryfall bulk dataset. All of them abort the run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Metadata fetch failed: {0}")]
    MetadataStatus(StatusCode),
    #[error("Metadata response has no download_uri")]
    MissingDownloadUri,
    #[error("Bulk data fetch failed: {0}")]
    BulkStatus(StatusCode),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Malformed bulk data: {0}")]
    Json(#[from] serde_json::Error),
}

/// An invalid rule table, detected before any data is fetched.
#[derive(Debug, Error, PartialEq)]
pub enum RuleError {
    #[error("Unknown bucket key: {0}")]
    UnknownBucket(String),
    #[error("Bucket {0} is not a date range bucket")]
    NotADateBucket(Bucket),
    #[error("Bucket {0} is declared more than once")]
    DuplicateBucket(Bucket),
    #[error("Invalid date '{0}'")]
    InvalidDate(String),
    #[error("Date range for {0} ends before it starts")]
    InvertedRange(Bucket),
    #[error("Date ranges {0} and {1} overlap")]
    OverlappingRanges(Bucket, Bucket),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Rules(#[from] RuleError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Pipeline worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}
