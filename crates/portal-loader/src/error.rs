use portal_core::{FormatError, StorageError};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to decode source '{source_name}': {error}")]
    Format {
        source_name: String,
        #[source]
        error: FormatError,
    },
    #[error("failed to open '{}': {error}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
    #[error("failed to store source '{source_name}': {error}")]
    Storage {
        source_name: String,
        #[source]
        error: StorageError,
    },
}
