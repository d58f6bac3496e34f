/**
 * Error Conversion
 *
 * This module provides conversion implementations for backend errors,
 * allowing them to be returned directly from Axum handlers.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "error": "Marker not found"
 * }
 * ```
 *
 * Clients match on the `error` string, so the body carries nothing else.
 */
use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    ///
    /// The response status comes from `status_code()` and the body is a
    /// JSON object with a single `error` field holding `message()`.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": self.message(),
        });

        (status, Json(body)).into_response()
    }
}
