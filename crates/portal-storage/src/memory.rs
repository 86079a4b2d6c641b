use crate::error::{Result, StorageError};
use async_trait::async_trait;
use parking_lot::RwLock;
use portal_core::{Namespace, PathMapping, ReadRepository, Repository};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

type Table = HashMap<String, String>;

/// In-memory implementation of the repository traits.
///
/// A whole batch is applied under one write lock, so readers observe either
/// none or all of it. Clones share the same namespaces.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    namespaces: Arc<RwLock<HashMap<Namespace, Table>>>,
}

impl InMemoryRepository {
    /// Creates a new, empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mappings in `namespace`, or `None` if it does not exist.
    pub fn len(&self, namespace: &Namespace) -> Option<usize> {
        self.namespaces.read().get(namespace).map(HashMap::len)
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, namespace: &Namespace, path: &str) -> Result<String> {
        trace!(namespace = %namespace, path = %path, "looking up mapping");

        let namespaces = self.namespaces.read();
        let table = namespaces
            .get(namespace)
            .ok_or_else(|| StorageError::NamespaceMissing(namespace.to_string()))?;

        table
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(path.to_string()))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn ensure_namespace(&self, namespace: &Namespace) -> Result<()> {
        self.namespaces
            .write()
            .entry(namespace.clone())
            .or_default();
        Ok(())
    }

    async fn bulk_put(&self, namespace: &Namespace, entries: &[PathMapping]) -> Result<()> {
        let mut namespaces = self.namespaces.write();
        let table = namespaces
            .get_mut(namespace)
            .ok_or_else(|| StorageError::NamespaceMissing(namespace.to_string()))?;

        for entry in entries {
            table.insert(entry.path.clone(), entry.destination.clone());
            debug!(namespace = %namespace, path = %entry.path, url = %entry.destination, "inserted mapping");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ns() -> Namespace {
        Namespace::default()
    }

    async fn repo() -> InMemoryRepository {
        let repo = InMemoryRepository::new();
        repo.ensure_namespace(&ns()).await.unwrap();
        repo
    }

    #[tokio::test]
    async fn put_and_get() {
        let repo = repo().await;

        repo.bulk_put(&ns(), &[PathMapping::new("/a", "https://a.example")])
            .await
            .unwrap();

        assert_eq!(repo.get(&ns(), "/a").await.unwrap(), "https://a.example");
    }

    #[tokio::test]
    async fn last_write_wins_within_batch() {
        let repo = repo().await;

        repo.bulk_put(&ns(), &[PathMapping::new("/a", "x"), PathMapping::new("/a", "y")])
            .await
            .unwrap();

        assert_eq!(repo.get(&ns(), "/a").await.unwrap(), "y");
        assert_eq!(repo.len(&ns()), Some(1));
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = repo().await;

        let err = repo.get(&ns(), "/nope").await.unwrap_err();
        assert_eq!(err, StorageError::NotFound("/nope".to_string()));
        assert_eq!(repo.len(&ns()), Some(0));
    }

    #[tokio::test]
    async fn missing_namespace() {
        let repo = InMemoryRepository::new();

        assert!(matches!(
            repo.get(&ns(), "/a").await,
            Err(StorageError::NamespaceMissing(_))
        ));
        assert!(matches!(
            repo.bulk_put(&ns(), &[]).await,
            Err(StorageError::NamespaceMissing(_))
        ));
        assert_eq!(repo.len(&ns()), None);
    }

    #[tokio::test]
    async fn ensure_namespace_keeps_existing_entries() {
        let repo = repo().await;
        repo.bulk_put(&ns(), &[PathMapping::new("/a", "x")])
            .await
            .unwrap();

        repo.ensure_namespace(&ns()).await.unwrap();

        assert_eq!(repo.get(&ns(), "/a").await.unwrap(), "x");
    }

    #[tokio::test]
    async fn clones_share_state() {
        let repo = repo().await;
        let clone = repo.clone();

        clone
            .bulk_put(&ns(), &[PathMapping::new("/a", "x")])
            .await
            .unwrap();

        assert_eq!(repo.get(&ns(), "/a").await.unwrap(), "x");
    }
}
