/**
 * Marker Upsert Handler
 *
 * This module implements marker create-or-replace via POST /markers.
 * There is no separate create endpoint; a payload whose id is already in
 * the collection replaces that record whole, anything else is appended.
 */
use crate::backend::error::BackendError;
use crate::backend::markers::handlers::types::MutationResponse;
use crate::backend::markers::MarkerService;
use crate::shared::Marker;
use axum::{extract::State, response::Json};
use std::sync::Arc;

/// Handle marker upsert (POST /markers)
///
/// The body must be a marker-shaped JSON object with an `id`. The id is
/// caller-supplied and opaque; coordinates are passed through without
/// range validation.
///
/// # Arguments
///
/// * `State(markers)` - The marker service
/// * `Json(marker)` - The marker to create or replace
///
/// # Returns
///
/// `{"success": true}` once the collection is committed and broadcast
///
/// # Errors
///
/// * `500 Internal Server Error` - If the collection cannot be persisted
///
/// # Example Request
///
/// ```http
/// POST /markers HTTP/1.1
/// Content-Type: application/json
///
/// {"id": "m1", "lat": 40.7128, "lng": -74.006, "info": "Pier 86"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"success": true}
/// ```
pub async fn upsert_marker(
    State(markers): State<Arc<MarkerService>>,
    Json(marker): Json<Marker>,
) -> Result<Json<MutationResponse>, BackendError> {
    tracing::info!("[Markers] Upsert request for marker: {}", marker.id);

    markers.upsert(marker).await?;

    Ok(Json(MutationResponse::ok()))
}
