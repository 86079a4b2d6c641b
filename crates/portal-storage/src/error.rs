pub use portal_core::error::{Result, StorageError};

/// Maps any redb failure onto the storage error taxonomy.
///
/// A table that does not exist is a namespace that was never created.
pub(crate) fn map_redb_error(err: impl Into<redb::Error>) -> StorageError {
    let err: redb::Error = err.into();
    let message = err.to_string();

    match err {
        redb::Error::TableDoesNotExist(name) => StorageError::NamespaceMissing(name),
        redb::Error::Io(_) | redb::Error::DatabaseAlreadyOpen => {
            StorageError::Unavailable(message)
        }
        redb::Error::Corrupted(_) | redb::Error::TableTypeMismatch { .. } => {
            StorageError::InvalidData(message)
        }
        _ => StorageError::Operation(message),
    }
}

pub(crate) fn map_join_error(err: tokio::task::JoinError) -> StorageError {
    StorageError::Operation(format!("blocking storage task failed: {err}"))
}
