//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised while loading candidates. Ranking itself never fails.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Candidate JSON could not be decoded
    #[error("Failed to decode candidates: {0}")]
    Decode(#[from] serde_json::Error),

    /// JSON was valid but not a list of records
    #[error("Invalid candidate list: {0}")]
    InvalidCandidates(String),
}
