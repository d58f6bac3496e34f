/**
 * Marker List Handler
 *
 * This module implements the read side of the marker API: GET /markers
 * returns the complete collection as a JSON array.
 */
use crate::backend::markers::MarkerService;
use crate::shared::MarkerCollection;
use axum::{extract::State, response::Json};
use std::sync::Arc;

/// Handle marker fetch-all (GET /markers)
///
/// Returns the current collection verbatim. A corrupt or missing
/// document is served as an empty array rather than an error, so this
/// endpoint never fails.
///
/// # Example Request
///
/// ```http
/// GET /markers HTTP/1.1
/// ```
///
/// # Example Response
///
/// ```json
/// [
///   {"id": "m1", "lat": 40.7128, "lng": -74.006, "photos": ["1700000000000-pier.jpg"]}
/// ]
/// ```
pub async fn list_markers(State(markers): State<Arc<MarkerService>>) -> Json<MarkerCollection> {
    let collection = markers.fetch_all().await;
    tracing::info!("[Markers] Serving {} markers", collection.len());
    Json(collection)
}
