/**
 * Marker Service
 *
 * The authoritative mutation path for marker state. Every operation
 * follows the same pattern: read the persisted collection, compute the
 * next collection, replace the document on disk, then hand the complete
 * new collection to the broadcast channel.
 *
 * # Mutation Serialization
 *
 * Two interleaved read-modify-write sequences can silently drop one
 * caller's change, so all mutating operations run behind a single commit
 * lock. The lock is held across the broadcast as well, which means
 * subscribers observe snapshots in exactly the order they were
 * committed. Fetch-all does not take the lock; document replacement is
 * atomic, so a concurrent reader sees either the old or the new
 * collection, never a torn one.
 *
 * # Photo Lifecycle
 *
 * Deleting a marker deletes every blob its `photos` list references,
 * and detaching a photo deletes its blob. A blob that is already gone
 * is skipped; any other blob failure aborts the mutation before the
 * document is touched, so references never dangle.
 */
use crate::backend::error::BackendError;
use crate::backend::realtime::{broadcast_collection, MarkerBroadcast};
use crate::backend::store::{MarkerStore, PhotoStore};
use crate::shared::{Marker, MarkerCollection};
use tokio::sync::{broadcast, Mutex};

/// Core marker mutation service
///
/// Owns the document store, the photo store, and the broadcast sender.
/// Handlers call into this type and never touch the stores directly for
/// marker state.
pub struct MarkerService {
    store: MarkerStore,
    photos: PhotoStore,
    broadcast_tx: MarkerBroadcast,
    // Serializes every read-modify-write sequence below
    commit: Mutex<()>,
}

impl MarkerService {
    /// Create the service around its stores and broadcast channel
    pub fn new(store: MarkerStore, photos: PhotoStore, broadcast_tx: MarkerBroadcast) -> Self {
        Self {
            store,
            photos,
            broadcast_tx,
            commit: Mutex::new(()),
        }
    }

    /// Current collection, straight from the document store
    ///
    /// Lock-free: replacement is atomic at the filesystem level, so this
    /// never observes a half-written document.
    pub async fn fetch_all(&self) -> MarkerCollection {
        self.store.load().await
    }

    /// Subscribe to collection snapshots pushed after each commit
    pub fn subscribe(&self) -> broadcast::Receiver<MarkerCollection> {
        self.broadcast_tx.subscribe()
    }

    /// The photo blob store, for handlers that persist uploads
    pub fn photos(&self) -> &PhotoStore {
        &self.photos
    }

    /// Create or replace a marker by id
    ///
    /// If a marker with the same id exists it is replaced whole; fields
    /// absent from the incoming record are dropped, not merged. A new id
    /// is appended to the collection.
    ///
    /// # Returns
    /// The complete collection after the commit
    ///
    /// # Errors
    /// Returns a persistence error if the document cannot be replaced
    pub async fn upsert(&self, marker: Marker) -> Result<MarkerCollection, BackendError> {
        let _guard = self.commit.lock().await;

        let mut markers = self.store.load().await;
        match markers.iter_mut().find(|m| m.id == marker.id) {
            Some(existing) => *existing = marker,
            None => markers.push(marker),
        }

        self.commit_and_broadcast(markers, "Error saving marker")
            .await
    }

    /// Delete a marker and every blob its photos reference
    ///
    /// # Returns
    /// The complete collection after the commit
    ///
    /// # Errors
    /// * `NotFound` - No marker with the given id exists
    /// * `Persistence` - A referenced blob or the document could not be
    ///   removed; the collection is left unchanged
    pub async fn delete(&self, id: &str) -> Result<MarkerCollection, BackendError> {
        let _guard = self.commit.lock().await;

        let markers = self.store.load().await;
        let marker = markers
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(BackendError::not_found)?;

        // Blobs go first so a failure here aborts before the document
        // changes; already-absent blobs are skipped inside the store
        for photo in &marker.photos {
            self.photos.delete(photo).await.map_err(|e| {
                tracing::error!("[Markers] Failed to delete blob {}: {}", photo, e);
                BackendError::persistence("Error deleting marker")
            })?;
        }

        let next: MarkerCollection = markers.into_iter().filter(|m| m.id != id).collect();
        self.commit_and_broadcast(next, "Error deleting marker").await
    }

    /// Append already-stored blob names to a marker's photo list
    ///
    /// Order is preserved and duplicates are allowed. The blobs must be
    /// durably stored before this is called; attaching to a missing
    /// marker leaves them orphaned on disk, which the caller is expected
    /// to log.
    ///
    /// # Returns
    /// The marker's complete photo list after the commit
    ///
    /// # Errors
    /// * `NotFound` - No marker with the given id exists
    /// * `Persistence` - The document could not be replaced
    pub async fn attach_photos(
        &self,
        id: &str,
        blob_names: Vec<String>,
    ) -> Result<Vec<String>, BackendError> {
        let _guard = self.commit.lock().await;

        let mut markers = self.store.load().await;
        let marker = markers
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(BackendError::not_found)?;

        marker.photos.extend(blob_names);
        let photos = marker.photos.clone();

        self.commit_and_broadcast(markers, "Error uploading photos")
            .await?;
        Ok(photos)
    }

    /// Remove one occurrence of a photo from a marker and delete its blob
    ///
    /// Removes the first occurrence of `photo_name` from the marker's
    /// list. A photo name that is not in the list still commits
    /// successfully; the blob is deleted either way if it exists.
    ///
    /// # Returns
    /// The complete collection after the commit
    ///
    /// # Errors
    /// * `NotFound` - No marker with the given id exists
    /// * `Persistence` - The blob or the document could not be removed
    pub async fn detach_photo(
        &self,
        marker_id: &str,
        photo_name: &str,
    ) -> Result<MarkerCollection, BackendError> {
        let _guard = self.commit.lock().await;

        let mut markers = self.store.load().await;
        let marker = markers
            .iter_mut()
            .find(|m| m.id == marker_id)
            .ok_or_else(BackendError::not_found)?;

        if let Some(pos) = marker.photos.iter().position(|p| p == photo_name) {
            marker.photos.remove(pos);
        }

        self.photos.delete(photo_name).await.map_err(|e| {
            tracing::error!("[Markers] Failed to delete blob {}: {}", photo_name, e);
            BackendError::persistence("Error deleting photo")
        })?;

        self.commit_and_broadcast(markers, "Error deleting photo")
            .await
    }

    /// Replace the document and push the new collection to subscribers
    ///
    /// Called with the commit lock held. Broadcasting inside the lock
    /// keeps push order identical to commit order.
    async fn commit_and_broadcast(
        &self,
        next: MarkerCollection,
        failure_message: &str,
    ) -> Result<MarkerCollection, BackendError> {
        self.store.replace(&next).await.map_err(|e| {
            tracing::error!("[Markers] Failed to replace marker document: {}", e);
            BackendError::persistence(failure_message)
        })?;

        broadcast_collection(&self.broadcast_tx, next.clone());
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::sync::Arc;
    use tempfile::{tempdir, TempDir};

    async fn test_service() -> (MarkerService, broadcast::Receiver<MarkerCollection>, TempDir) {
        let dir = tempdir().unwrap();
        let store = MarkerStore::open(dir.path().join("markers.json"))
            .await
            .unwrap();
        let photos = PhotoStore::open(dir.path().join("pictures")).await.unwrap();
        let (tx, rx) = broadcast::channel(16);
        (MarkerService::new(store, photos, tx), rx, dir)
    }

    fn marker(id: &str, lat: f64, lng: f64) -> Marker {
        Marker::new(id.to_string(), lat, lng)
    }

    #[tokio::test]
    async fn test_upsert_into_empty_collection() {
        let (service, _rx, _dir) = test_service().await;

        let collection = service.upsert(marker("m1", 1.0, 2.0)).await.unwrap();

        assert_eq!(collection, vec![marker("m1", 1.0, 2.0)]);
        assert_eq!(service.fetch_all().await, collection);
    }

    #[tokio::test]
    async fn test_upsert_replaces_whole_record() {
        let (service, _rx, _dir) = test_service().await;
        service
            .upsert(marker("m1", 1.0, 2.0).with_icon_url("pin.png".to_string()))
            .await
            .unwrap();

        let collection = service.upsert(marker("m1", 5.0, 6.0)).await.unwrap();

        assert_eq!(collection.len(), 1);
        assert_eq!(collection[0].lat, 5.0);
        assert_eq!(collection[0].icon_url, None);
    }

    #[tokio::test]
    async fn test_upsert_is_idempotent() {
        let (service, _rx, _dir) = test_service().await;
        let m = marker("m1", 1.0, 2.0);

        let once = service.upsert(m.clone()).await.unwrap();
        let twice = service.upsert(m).await.unwrap();

        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_upsert_never_duplicates_ids() {
        let (service, _rx, _dir) = test_service().await;

        for lat in 0..5 {
            service.upsert(marker("m1", lat as f64, 0.0)).await.unwrap();
            service.upsert(marker("m2", lat as f64, 1.0)).await.unwrap();
        }

        let collection = service.fetch_all().await;
        let mut ids: Vec<&str> = collection.iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(collection.len(), ids.len());
    }

    #[tokio::test]
    async fn test_delete_removes_marker_and_blobs() {
        let (service, _rx, _dir) = test_service().await;
        let blob = service.photos().save("pier.jpg", b"jpeg").await.unwrap();
        service
            .upsert(marker("m1", 1.0, 2.0).with_photos(vec![blob.clone()]))
            .await
            .unwrap();

        let collection = service.delete("m1").await.unwrap();

        assert!(collection.is_empty());
        assert!(service.fetch_all().await.is_empty());
        assert!(!service.photos().dir().join(&blob).exists());
    }

    #[tokio::test]
    async fn test_delete_missing_marker_is_not_found() {
        let (service, _rx, _dir) = test_service().await;
        service.upsert(marker("m1", 1.0, 2.0)).await.unwrap();
        service.delete("m1").await.unwrap();

        let err = service.delete("m1").await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Marker not found");
    }

    #[tokio::test]
    async fn test_delete_skips_already_missing_blobs() {
        let (service, _rx, _dir) = test_service().await;
        service
            .upsert(marker("m1", 1.0, 2.0).with_photos(vec!["1-gone.jpg".to_string()]))
            .await
            .unwrap();

        let collection = service.delete("m1").await.unwrap();

        assert!(collection.is_empty());
    }

    #[tokio::test]
    async fn test_attach_appends_in_order() {
        let (service, _rx, _dir) = test_service().await;
        service
            .upsert(marker("m1", 1.0, 2.0).with_photos(vec!["a.jpg".to_string()]))
            .await
            .unwrap();

        let photos = service
            .attach_photos("m1", vec!["b.jpg".to_string()])
            .await
            .unwrap();

        assert_eq!(photos, vec!["a.jpg".to_string(), "b.jpg".to_string()]);
    }

    #[tokio::test]
    async fn test_attach_allows_duplicates() {
        let (service, _rx, _dir) = test_service().await;
        service
            .upsert(marker("m1", 1.0, 2.0).with_photos(vec!["a.jpg".to_string()]))
            .await
            .unwrap();

        let photos = service
            .attach_photos("m1", vec!["a.jpg".to_string()])
            .await
            .unwrap();

        assert_eq!(photos, vec!["a.jpg".to_string(), "a.jpg".to_string()]);
    }

    #[tokio::test]
    async fn test_attach_to_missing_marker_is_not_found() {
        let (service, _rx, _dir) = test_service().await;

        let err = service
            .attach_photos("ghost", vec!["a.jpg".to_string()])
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_detach_removes_first_occurrence_only() {
        let (service, _rx, _dir) = test_service().await;
        service
            .upsert(marker("m1", 1.0, 2.0).with_photos(vec![
                "a.jpg".to_string(),
                "b.jpg".to_string(),
                "a.jpg".to_string(),
            ]))
            .await
            .unwrap();

        let collection = service.detach_photo("m1", "a.jpg").await.unwrap();

        assert_eq!(
            collection[0].photos,
            vec!["b.jpg".to_string(), "a.jpg".to_string()]
        );
    }

    #[tokio::test]
    async fn test_detach_deletes_blob() {
        let (service, _rx, _dir) = test_service().await;
        let blob = service.photos().save("pier.jpg", b"jpeg").await.unwrap();
        service
            .upsert(marker("m1", 1.0, 2.0).with_photos(vec![blob.clone()]))
            .await
            .unwrap();

        service.detach_photo("m1", &blob).await.unwrap();

        assert!(!service.photos().dir().join(&blob).exists());
        assert!(service.fetch_all().await[0].photos.is_empty());
    }

    #[tokio::test]
    async fn test_detach_unlisted_photo_still_commits() {
        let (service, _rx, _dir) = test_service().await;
        service.upsert(marker("m1", 1.0, 2.0)).await.unwrap();

        let collection = service.detach_photo("m1", "never-listed.jpg").await.unwrap();

        assert!(collection[0].photos.is_empty());
    }

    #[tokio::test]
    async fn test_detach_on_missing_marker_is_not_found() {
        let (service, _rx, _dir) = test_service().await;

        let err = service.detach_photo("ghost", "a.jpg").await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_broadcast_payload_matches_fetch_all() {
        let (service, mut rx, _dir) = test_service().await;

        service.upsert(marker("m1", 1.0, 2.0)).await.unwrap();

        let pushed = rx.recv().await.unwrap();
        assert_eq!(pushed, service.fetch_all().await);
    }

    #[tokio::test]
    async fn test_every_mutation_pushes_a_snapshot() {
        let (service, mut rx, _dir) = test_service().await;

        service.upsert(marker("m1", 1.0, 2.0)).await.unwrap();
        service
            .attach_photos("m1", vec!["a.jpg".to_string()])
            .await
            .unwrap();
        service.detach_photo("m1", "a.jpg").await.unwrap();
        service.delete("m1").await.unwrap();

        assert_eq!(rx.recv().await.unwrap().len(), 1);
        assert_eq!(rx.recv().await.unwrap()[0].photos.len(), 1);
        assert_eq!(rx.recv().await.unwrap()[0].photos.len(), 0);
        assert!(rx.recv().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_mutation_pushes_nothing() {
        let (service, mut rx, _dir) = test_service().await;

        assert!(service.delete("ghost").await.is_err());

        assert!(matches!(
            rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }

    #[tokio::test]
    async fn test_concurrent_upserts_both_survive() {
        let (service, _rx, _dir) = test_service().await;
        let service = Arc::new(service);

        let a = {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.upsert(marker("m1", 1.0, 2.0)).await })
        };
        let b = {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.upsert(marker("m2", 3.0, 4.0)).await })
        };
        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        let collection = service.fetch_all().await;
        assert_eq!(collection.len(), 2);
        assert!(collection.iter().any(|m| m.id == "m1"));
        assert!(collection.iter().any(|m| m.id == "m2"));
    }
}
