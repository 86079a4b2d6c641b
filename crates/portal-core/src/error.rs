use crate::source::Format;
use thiserror::Error;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The path has no mapping. Expected on every fallback, never a defect.
    #[error("path not registered: {0}")]
    NotFound(String),
    /// The namespace was never created.
    #[error("namespace does not exist: {0}")]
    NamespaceMissing(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

impl StorageError {
    /// Returns `true` for the only condition a fallback chain recovers from.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("malformed {format} input: {message}")]
    Malformed { format: Format, message: String },
    #[error("failed to read {format} input: {message}")]
    Read { format: Format, message: String },
    #[error("failed to encode {format}: {message}")]
    Encode { format: Format, message: String },
    #[error("unrecognized source format for '{0}'")]
    UnknownExtension(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid namespace: {0}")]
    InvalidNamespace(String),
}
