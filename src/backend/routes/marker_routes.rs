/**
 * Marker Route Handlers
 *
 * This module defines route handlers for the marker API, including:
 * - Marker collection endpoints (list, upsert, delete)
 * - Photo endpoints (upload, detach)
 *
 * # Routes
 *
 * ## Markers
 * - `GET /markers` - Fetch the full marker collection
 * - `POST /markers` - Upsert one marker by id
 * - `DELETE /markers/{id}` - Delete a marker and its photos
 *
 * ## Photos
 * - `POST /upload/{id}` - Store uploaded photos and attach them to a marker
 * - `DELETE /photos/{marker_id}/{photo}` - Detach and delete one photo
 */

use axum::extract::DefaultBodyLimit;
use axum::Router;

use crate::backend::markers::handlers::{
    delete_marker, detach_photo, list_markers, upload_photos, upsert_marker,
};
use crate::backend::server::state::AppState;

/// Maximum accepted upload body size in bytes
///
/// A single request carries up to ten photos, which does not fit in
/// Axum's 2 MB default limit.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Configure marker API routes
///
/// This function adds the following routes to the router:
///
/// ## Marker Routes
/// - `GET /markers` - Fetch the full marker collection
/// - `POST /markers` - Upsert one marker by id
/// - `DELETE /markers/{id}` - Delete a marker and its photos
///
/// ## Photo Routes
/// - `POST /upload/{id}` - Store uploaded photos and attach them to a marker
/// - `DELETE /photos/{marker_id}/{photo}` - Detach and delete one photo
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with marker API routes configured
///
/// # Authentication
///
/// All marker routes are public. Only the workspace UI mount is
/// session-gated; the API itself is open, matching the behavior the
/// map clients rely on.
pub fn configure_marker_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Marker collection endpoints
        .route(
            "/markers",
            axum::routing::get(list_markers).post(upsert_marker),
        )
        .route(
            "/markers/{id}",
            axum::routing::delete(delete_marker),
        )
        // Photo endpoints
        .route(
            "/upload/{id}",
            axum::routing::post(upload_photos)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route(
            "/photos/{marker_id}/{photo}",
            axum::routing::delete(detach_photo),
        )
}
