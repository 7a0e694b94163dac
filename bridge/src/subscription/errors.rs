use providers::{IndexerError, ReaderError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum QueryError {
    #[error("No account connected")]
    ConnectionAbsent,
    #[error("Fetch failed: {0}")]
    FetchFailed(String),
    #[error("Failed to decode response: {0}")]
    DecodeFailed(String),
}

impl From<ReaderError> for QueryError {
    fn from(error: ReaderError) -> Self {
        match error {
            ReaderError::Decode(msg) => Self::DecodeFailed(msg),
            ReaderError::Indexer(IndexerError::RequestFailed(e)) if e.is_decode() => {
                Self::DecodeFailed(e.to_string())
            }
            other => Self::FetchFailed(other.to_string()),
        }
    }
}
