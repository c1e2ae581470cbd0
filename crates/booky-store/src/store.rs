//! Shared, optionally persistent catalog store.
//!
//! The `Store` type wraps a [`Catalog`] in an async read/write lock so it
//! can be shared across request handlers, and writes a snapshot after every
//! successful mutation when a data path is configured.

use std::path::{Path, PathBuf};

use tokio::sync::{RwLock, RwLockReadGuard};

use crate::catalog::Catalog;
use crate::error::StoreResult;
use crate::snapshot;

/// Configuration for opening the store.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Snapshot file. `None` keeps the catalog in memory only.
    pub data_path: Option<PathBuf>,
}

impl StoreConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `BOOKY_DATA_PATH` - Optional snapshot file; unset or empty means
    ///   memory only
    pub fn from_env() -> Self {
        let data_path = std::env::var_os("BOOKY_DATA_PATH")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self { data_path }
    }

    /// Configuration for a memory-only store.
    pub fn in_memory() -> Self {
        Self { data_path: None }
    }

    /// Configuration persisting to `path`.
    pub fn persistent(path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: Some(path.into()),
        }
    }
}

/// Catalog store shared by all request handlers.
#[derive(Debug)]
pub struct Store {
    catalog: RwLock<Catalog>,
    data_path: Option<PathBuf>,
}

impl Store {
    /// Open the store, loading the snapshot if one is configured.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        let catalog = match &config.data_path {
            Some(path) => snapshot::load(path)?,
            None => {
                tracing::info!("No data path configured, catalog is memory only");
                Catalog::new()
            }
        };

        Ok(Self {
            catalog: RwLock::new(catalog),
            data_path: config.data_path,
        })
    }

    /// Memory-only store seeded with `catalog`.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            data_path: None,
        }
    }

    /// Snapshot file this store writes to, if any.
    pub fn data_path(&self) -> Option<&Path> {
        self.data_path.as_deref()
    }

    /// Acquire shared read access to the catalog.
    pub async fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().await
    }

    /// Run a mutation under the write lock and persist the result.
    ///
    /// With a data path configured, a failed mutation or snapshot write
    /// leaves the catalog as it was before the call.
    ///
    /// The snapshot is written with blocking `std::fs` calls on the calling
    /// task while the write lock is held: one blocking round trip per
    /// mutation, with no await point between the file write and the swap.
    pub async fn mutate<T, F>(&self, op: F) -> StoreResult<T>
    where
        F: FnOnce(&mut Catalog) -> StoreResult<T>,
    {
        let mut catalog = self.catalog.write().await;

        let Some(path) = &self.data_path else {
            return op(&mut *catalog);
        };

        // Memory must never run ahead of the snapshot on disk.
        let mut next = catalog.clone();
        let output = op(&mut next)?;
        snapshot::save(&next, path)?;
        *catalog = next;

        Ok(output)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::from_catalog(Catalog::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booky_core::{Book, Isbn};

    use crate::error::StoreError;

    #[tokio::test]
    async fn mutate_persists_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let store = Store::open(StoreConfig::persistent(&path)).unwrap();
        assert_eq!(store.data_path(), Some(path.as_path()));

        store
            .mutate(|catalog| catalog.add_book(Book::new("123", "Persisted")))
            .await
            .unwrap();

        let reopened = Store::open(StoreConfig::persistent(&path)).unwrap();
        let catalog = reopened.read().await;
        assert_eq!(catalog.find_book(&Isbn::new("123")).unwrap().title, "Persisted");
    }

    #[tokio::test]
    async fn failed_mutation_leaves_catalog_and_snapshot_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let store = Store::open(StoreConfig::persistent(&path)).unwrap();

        let result = store
            .mutate(|catalog| {
                catalog.add_book(Book::new("123", "First"))?;
                catalog.add_book(Book::new("123", "Duplicate"))
            })
            .await;
        assert!(result.is_err());

        assert!(store.read().await.is_empty());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn failed_snapshot_write_rolls_back_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("catalog.json");
        let store = Store::open(StoreConfig::persistent(&path)).unwrap();

        let err = store
            .mutate(|catalog| catalog.add_book(Book::new("123", "Unsaved")))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(store.read().await.is_empty());
    }

    #[tokio::test]
    async fn snapshot_is_on_disk_when_mutate_returns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let store = Store::open(StoreConfig::persistent(&path)).unwrap();

        store
            .mutate(|catalog| catalog.add_book(Book::new("123", "Saved")))
            .await
            .unwrap();

        let loaded = snapshot::load(&path).unwrap();
        assert_eq!(loaded.list_books(), store.read().await.list_books());
    }

    #[tokio::test]
    async fn in_memory_store_does_not_write() {
        let store = Store::open(StoreConfig::in_memory()).unwrap();
        assert!(store.data_path().is_none());

        store
            .mutate(|catalog| catalog.add_book(Book::new("123", "Ephemeral")))
            .await
            .unwrap();
        assert!(!store.read().await.is_empty());
    }
}
