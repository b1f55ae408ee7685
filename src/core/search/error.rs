//! Search Error Types
//!
//! Error handling for content-index queries. An index failure is surfaced
//! to the caller as a request failure — answering with silently empty
//! context would be misleading.

use thiserror::Error;

/// Content-index query errors
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Content index unavailable: {0}")]
    Unavailable(String),

    #[error("Content index query timed out after {0}s")]
    Timeout(u64),

    #[error("Unknown document reference: {0}")]
    UnknownDocument(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for content-index operations
pub type Result<T> = std::result::Result<T, SearchError>;
