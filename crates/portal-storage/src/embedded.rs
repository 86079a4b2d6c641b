use crate::error::{map_join_error, map_redb_error, Result, StorageError};
use async_trait::async_trait;
use portal_core::{Namespace, PathMapping, ReadRepository, Repository};
use redb::{Database, ReadTransaction, TableDefinition, TableHandle};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Each namespace is one redb table from path to destination.
fn table(namespace: &Namespace) -> TableDefinition<'_, &'static str, &'static str> {
    TableDefinition::new(namespace.as_str())
}

/// Durable mapping store backed by a single redb file.
///
/// redb serializes write transactions and gives every read transaction a
/// stable snapshot, which is exactly the isolation the redirector needs:
/// a lookup racing a bulk load sees the whole batch or none of it.
///
/// Cloning is cheap and shares the open database. The file is locked while
/// open, so a second process opening the same location fails instead of
/// sharing it.
#[derive(Clone)]
pub struct RedbRepository {
    db: Arc<Database>,
}

impl std::fmt::Debug for RedbRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbRepository").finish_non_exhaustive()
    }
}

impl RedbRepository {
    /// Opens the store at `location`, creating the file if it does not exist.
    ///
    /// Parent directories are not created.
    pub fn open(location: impl AsRef<Path>) -> Result<Self> {
        let location = location.as_ref();
        let db = Database::create(location).map_err(map_redb_error)?;
        info!(location = %location.display(), "opened mapping store");
        Ok(Self { db: Arc::new(db) })
    }

    /// Begins a read transaction.
    ///
    /// Every lookup through the returned [`Snapshot`] observes the state
    /// committed before this call, no matter what commits afterwards.
    pub fn snapshot(&self) -> Result<Snapshot> {
        let txn = self.db.begin_read().map_err(map_redb_error)?;
        Ok(Snapshot { txn })
    }

    /// Lists the names of all existing namespaces.
    pub fn namespaces(&self) -> Result<Vec<String>> {
        let txn = self.db.begin_read().map_err(map_redb_error)?;
        let names = txn
            .list_tables()
            .map_err(map_redb_error)?
            .map(|handle| handle.name().to_string())
            .collect();
        Ok(names)
    }

    async fn blocking<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> Result<T> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || f(&db))
            .await
            .map_err(map_join_error)?
    }
}

/// A read transaction over the mapping store.
pub struct Snapshot {
    txn: ReadTransaction,
}

impl Snapshot {
    pub fn get(&self, namespace: &Namespace, path: &str) -> Result<String> {
        let table = self.txn.open_table(table(namespace)).map_err(map_redb_error)?;
        match table.get(path).map_err(map_redb_error)? {
            Some(destination) => Ok(destination.value().to_string()),
            None => Err(StorageError::NotFound(path.to_string())),
        }
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot").finish_non_exhaustive()
    }
}

fn write_batch(db: &Database, namespace: &Namespace, entries: &[PathMapping]) -> Result<()> {
    let txn = db.begin_write().map_err(map_redb_error)?;

    // open_table would create the table, so check first.
    let exists = txn
        .list_tables()
        .map_err(map_redb_error)?
        .any(|handle| handle.name() == namespace.as_str());
    if !exists {
        txn.abort().map_err(map_redb_error)?;
        return Err(StorageError::NamespaceMissing(namespace.to_string()));
    }

    {
        let mut table = txn.open_table(table(namespace)).map_err(map_redb_error)?;
        for entry in entries {
            table
                .insert(entry.path.as_str(), entry.destination.as_str())
                .map_err(map_redb_error)?;
            debug!(
                namespace = %namespace,
                path = %entry.path,
                url = %entry.destination,
                "inserted mapping"
            );
        }
    }

    // Dropping an uncommitted transaction on any error above rolls it back.
    txn.commit().map_err(map_redb_error)
}

#[async_trait]
impl ReadRepository for RedbRepository {
    async fn get(&self, namespace: &Namespace, path: &str) -> Result<String> {
        trace!(namespace = %namespace, path = %path, "looking up mapping");

        let namespace = namespace.clone();
        let path = path.to_string();
        self.blocking(move |db| {
            let txn = db.begin_read().map_err(map_redb_error)?;
            Snapshot { txn }.get(&namespace, &path)
        })
        .await
    }
}

#[async_trait]
impl Repository for RedbRepository {
    async fn ensure_namespace(&self, namespace: &Namespace) -> Result<()> {
        let namespace = namespace.clone();
        self.blocking(move |db| {
            let txn = db.begin_write().map_err(map_redb_error)?;
            txn.open_table(table(&namespace)).map_err(map_redb_error)?;
            txn.commit().map_err(map_redb_error)?;
            debug!(namespace = %namespace, "namespace ready");
            Ok(())
        })
        .await
    }

    async fn bulk_put(&self, namespace: &Namespace, entries: &[PathMapping]) -> Result<()> {
        trace!(namespace = %namespace, count = entries.len(), "writing batch");

        let namespace = namespace.clone();
        let entries = entries.to_vec();
        self.blocking(move |db| write_batch(db, &namespace, &entries))
            .await
    }
}
