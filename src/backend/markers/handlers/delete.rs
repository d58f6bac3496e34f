/**
 * Marker Delete Handler
 *
 * This module implements marker removal via DELETE /markers/{id}. A
 * deleted marker takes its photo blobs with it; the collection and the
 * blob directory stay consistent.
 */
use crate::backend::error::BackendError;
use crate::backend::markers::handlers::types::MutationResponse;
use crate::backend::markers::MarkerService;
use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

/// Handle marker delete (DELETE /markers/{id})
///
/// # Arguments
///
/// * `State(markers)` - The marker service
/// * `Path(id)` - Id of the marker to remove
///
/// # Returns
///
/// `{"success": true}` once the collection is committed and broadcast
///
/// # Errors
///
/// * `404 Not Found` - No marker with the given id exists
/// * `500 Internal Server Error` - A blob or the collection could not be
///   removed; the collection is left unchanged
///
/// # Example Request
///
/// ```http
/// DELETE /markers/m1 HTTP/1.1
/// ```
///
/// # Example Response
///
/// ```json
/// {"success": true}
/// ```
pub async fn delete_marker(
    State(markers): State<Arc<MarkerService>>,
    Path(id): Path<String>,
) -> Result<Json<MutationResponse>, BackendError> {
    tracing::info!("[Markers] Delete request for marker: {}", id);

    markers.delete(&id).await?;

    Ok(Json(MutationResponse::ok()))
}
