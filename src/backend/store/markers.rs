/**
 * Marker Document Store
 *
 * Persists the entire marker collection as one JSON document on disk.
 * There is no per-record access: reads load the whole array, writes
 * replace the whole array. The document is the single source of truth
 * for marker state across restarts.
 *
 * Replacement is atomic. The new document is written to a sibling temp
 * file, synced, and renamed over the target, so a reader never observes
 * a torn write even while a replacement is in flight. Writers are
 * expected to serialize their calls; the service layer holds its commit
 * lock across `replace`.
 */
use crate::backend::store::error::StoreResult;
use crate::shared::MarkerCollection;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Whole-document JSON store for the marker collection
#[derive(Debug, Clone)]
pub struct MarkerStore {
    path: PathBuf,
}

impl MarkerStore {
    /// Open the store at the given path, seeding an empty document if needed
    ///
    /// Parent directories are created when missing. If no document exists
    /// yet, an empty collection (`[]`) is written so that the first load
    /// after a fresh install reads a well-formed document.
    ///
    /// # Arguments
    /// * `path` - Location of the JSON document, e.g. `data/markers.json`
    ///
    /// # Errors
    /// Returns an error if directories cannot be created or the seed
    /// document cannot be written
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        if tokio::fs::try_exists(&path).await? {
            tracing::info!("[Store] Using existing marker document: {}", path.display());
        } else {
            tokio::fs::write(&path, b"[]").await?;
            tracing::info!("[Store] Seeded empty marker document: {}", path.display());
        }

        Ok(Self { path })
    }

    /// Load the complete marker collection from disk
    ///
    /// This never fails from the caller's perspective. A missing or
    /// unparseable document is logged and treated as an empty collection,
    /// so a corrupted file degrades to a fresh map instead of taking the
    /// read path down. The next successful replacement rewrites the
    /// document in full.
    pub async fn load(&self) -> MarkerCollection {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(
                    "[Store] Failed to read marker document {}: {}",
                    self.path.display(),
                    e
                );
                return MarkerCollection::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(collection) => collection,
            Err(e) => {
                tracing::error!(
                    "[Store] Marker document {} is not valid JSON, treating as empty: {}",
                    self.path.display(),
                    e
                );
                MarkerCollection::new()
            }
        }
    }

    /// Replace the persisted document with the given collection
    ///
    /// The collection is serialized as pretty-printed JSON, written to a
    /// sibling temp file, synced to disk, and renamed over the target.
    ///
    /// # Errors
    /// Returns an error if serialization or any filesystem step fails;
    /// the previous document stays intact in that case
    pub async fn replace(&self, collection: &MarkerCollection) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(collection)?;

        let tmp_path = self.tmp_path();
        let mut file = tokio::fs::File::create(&tmp_path).await?;
        file.write_all(&bytes).await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }

    /// Path of the underlying JSON document
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
