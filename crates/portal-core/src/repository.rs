use crate::error::Result;
use crate::mapping::PathMapping;
use crate::namespace::Namespace;
use async_trait::async_trait;

/// A read-only view of a mapping store.
///
/// This trait provides only the read operations from [`Repository`],
/// allowing the redirector to hold read-only access.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Looks up the destination registered for `path` in `namespace`.
    ///
    /// The lookup runs inside a single read transaction, so a concurrent
    /// [`Repository::bulk_put`] is observed either entirely or not at all.
    ///
    /// # Errors
    ///
    /// * [`StorageError::NotFound`] if the path has no mapping
    /// * [`StorageError::NamespaceMissing`] if the namespace was never created
    /// * any other variant if the backing store failed
    ///
    /// [`StorageError::NotFound`]: crate::StorageError::NotFound
    /// [`StorageError::NamespaceMissing`]: crate::StorageError::NamespaceMissing
    async fn get(&self, namespace: &Namespace, path: &str) -> Result<String>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Creates the namespace if it does not exist yet. Idempotent.
    async fn ensure_namespace(&self, namespace: &Namespace) -> Result<()>;

    /// Inserts or overwrites every entry in one atomic write.
    ///
    /// Entries are applied in order, so for duplicate paths the later entry
    /// wins. Either the whole batch becomes visible or, on failure, none of
    /// it does. An empty batch changes nothing but still requires the
    /// namespace to exist.
    async fn bulk_put(&self, namespace: &Namespace, entries: &[PathMapping]) -> Result<()>;
}
