use portal_core::StorageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RedirectorError>;

/// A lookup failure that is not a plain miss.
///
/// Misses never surface here; they only move resolution to the next link.
#[derive(Debug, Clone, Error)]
pub enum RedirectorError {
    #[error("storage operation failed: {0}")]
    Storage(
        #[from]
        #[source]
        StorageError,
    ),
}
