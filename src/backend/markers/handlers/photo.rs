/**
 * Photo Detach Handler
 *
 * This module implements photo removal via DELETE /photos/{marker_id}/{photo}.
 * Detaching removes the name from the marker's photo list and deletes the
 * blob in the same commit.
 */
use crate::backend::error::BackendError;
use crate::backend::markers::handlers::types::MutationResponse;
use crate::backend::markers::MarkerService;
use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

/// Handle photo detach (DELETE /photos/{marker_id}/{photo})
///
/// Removes the first occurrence of the photo name from the marker's
/// list and deletes the blob. A name that is not in the list still
/// succeeds; only a missing marker is an error.
///
/// # Arguments
///
/// * `State(markers)` - The marker service
/// * `Path((marker_id, photo))` - The marker and the stored photo name
///
/// # Returns
///
/// `{"success": true}` once the collection is committed and broadcast
///
/// # Errors
///
/// * `404 Not Found` - No marker with the given id exists
/// * `500 Internal Server Error` - The blob or the collection could not
///   be removed
///
/// # Example Request
///
/// ```http
/// DELETE /photos/m1/1700000000000-pier.jpg HTTP/1.1
/// ```
///
/// # Example Response
///
/// ```json
/// {"success": true}
/// ```
pub async fn detach_photo(
    State(markers): State<Arc<MarkerService>>,
    Path((marker_id, photo)): Path<(String, String)>,
) -> Result<Json<MutationResponse>, BackendError> {
    tracing::info!(
        "[Markers] Detach request for photo {} on marker {}",
        photo,
        marker_id
    );

    markers.detach_photo(&marker_id, &photo).await?;

    Ok(Json(MutationResponse::ok()))
}
