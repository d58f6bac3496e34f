/**
 * Photo Blob Store
 *
 * Stores uploaded photo files in a flat directory. Markers reference
 * photos by stored filename only, and the same directory is mounted as a
 * static route so browsers can fetch the blobs directly.
 *
 * Stored names are `{unix-millis}-{original-name}` so that two uploads
 * of the same original filename do not clobber each other. The original
 * name is reduced to its final path component before use, which keeps
 * client-supplied names from escaping the photo directory.
 */
use crate::backend::store::error::StoreResult;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Flat-directory blob store for uploaded photos
#[derive(Debug, Clone)]
pub struct PhotoStore {
    dir: PathBuf,
}

impl PhotoStore {
    /// Open the store, creating the photo directory if it does not exist
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created
    pub async fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        tracing::info!("[Photos] Photo directory ready: {}", dir.display());
        Ok(Self { dir })
    }

    /// Write a photo blob and return the name it was stored under
    ///
    /// # Arguments
    /// * `original_name` - Filename supplied by the uploading client
    /// * `bytes` - Raw photo content
    ///
    /// # Errors
    /// Returns an error if the blob cannot be written
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> StoreResult<String> {
        let stored = Self::stored_name(original_name);
        let path = self.dir.join(&stored);

        let mut file = tokio::fs::File::create(&path).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;

        tracing::info!("[Photos] Stored {} ({} bytes)", stored, bytes.len());
        Ok(stored)
    }

    /// Remove a stored blob
    ///
    /// Deleting a blob that is already gone is not an error; the caller
    /// only cares that the file no longer exists afterwards.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed
    pub async fn delete(&self, stored_name: &str) -> StoreResult<()> {
        let path = self.dir.join(Self::final_component(stored_name));
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("[Photos] Blob already absent: {}", stored_name);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Directory the blobs live in, for mounting as a static route
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn stored_name(original_name: &str) -> String {
        let millis = chrono::Utc::now().timestamp_millis();
        format!("{}-{}", millis, Self::final_component(original_name))
    }

    /// Reduce a client-supplied name to its final path component
    fn final_component(name: &str) -> &str {
        Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("photo")
    }
}
