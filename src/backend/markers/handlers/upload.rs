/**
 * Photo Upload Handler
 *
 * This module implements photo attachment via POST /upload/{id}. The
 * request is multipart form data with up to ten file parts under the
 * field name `photos`.
 *
 * # Upload Before Attach
 *
 * Blobs are written to the photo store before the marker is touched. A
 * failure between the two steps therefore leaves orphaned blobs on disk
 * rather than a marker referencing files that do not exist. Orphans are
 * logged when they happen; there is no reconciliation pass that cleans
 * them up.
 */
use crate::backend::error::BackendError;
use crate::backend::markers::handlers::types::UploadResponse;
use crate::backend::markers::MarkerService;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

/// Most file parts accepted in one upload request
const MAX_PHOTOS_PER_UPLOAD: usize = 10;

/// Handle photo upload (POST /upload/{id})
///
/// Stores each `photos` file part in the blob store, then appends the
/// stored names to the marker's photo list in one commit. Parts under
/// any other field name are ignored.
///
/// # Arguments
///
/// * `State(markers)` - The marker service
/// * `Path(id)` - Id of the marker receiving the photos
/// * `multipart` - Multipart form data with `photos` file parts
///
/// # Returns
///
/// `{"success": true, "photos": [...]}` with the marker's complete
/// photo list after the attach
///
/// # Errors
///
/// * `400 Bad Request` - The multipart body is malformed or carries more
///   than ten `photos` parts
/// * `404 Not Found` - No marker with the given id exists; any blobs
///   already stored for this request remain on disk as orphans
/// * `500 Internal Server Error` - A blob or the collection could not be
///   written
///
/// # Example Request
///
/// ```http
/// POST /upload/m1 HTTP/1.1
/// Content-Type: multipart/form-data; boundary=----boundary
///
/// ------boundary
/// Content-Disposition: form-data; name="photos"; filename="pier.jpg"
/// Content-Type: image/jpeg
///
/// <bytes>
/// ------boundary--
/// ```
///
/// # Example Response
///
/// ```json
/// {"success": true, "photos": ["1700000000000-pier.jpg"]}
/// ```
pub async fn upload_photos(
    State(markers): State<Arc<MarkerService>>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, BackendError> {
    tracing::info!("[Markers] Photo upload request for marker: {}", id);

    let mut stored: Vec<String> = Vec::new();
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("[Markers] Failed to read multipart field: {}", e);
        BackendError::handler(StatusCode::BAD_REQUEST, "Malformed upload body")
    })? {
        if field.name() != Some("photos") {
            tracing::debug!("[Markers] Ignoring unexpected field: {:?}", field.name());
            continue;
        }

        if stored.len() == MAX_PHOTOS_PER_UPLOAD {
            tracing::warn!(
                "[Markers] Upload for {} exceeded the {}-photo limit, {} blobs already stored",
                id,
                MAX_PHOTOS_PER_UPLOAD,
                stored.len()
            );
            return Err(BackendError::handler(
                StatusCode::BAD_REQUEST,
                "Too many photos",
            ));
        }

        let original_name = field.file_name().unwrap_or("photo").to_string();
        let bytes = field.bytes().await.map_err(|e| {
            tracing::error!("[Markers] Failed to read photo bytes: {}", e);
            BackendError::handler(StatusCode::BAD_REQUEST, "Malformed upload body")
        })?;

        let name = markers.photos().save(&original_name, &bytes).await.map_err(|e| {
            tracing::error!("[Markers] Failed to store photo {}: {}", original_name, e);
            BackendError::persistence("Error uploading photos")
        })?;
        stored.push(name);
    }

    match markers.attach_photos(&id, stored.clone()).await {
        Ok(photos) => Ok(Json(UploadResponse::ok(photos))),
        Err(e) => {
            if !stored.is_empty() {
                // The blobs are already durable and nothing references them
                tracing::warn!(
                    "[Markers] Attach to {} failed, {} blobs orphaned: {:?}",
                    id,
                    stored.len(),
                    stored
                );
            }
            Err(e)
        }
    }
}
