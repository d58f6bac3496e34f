/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Types
 *
 * - `NotFound` - The addressed marker does not exist
 * - `Persistence` - Marker state could not be read or written
 * - `Handler` - Request-level failures with an explicit status code
 *
 * # Error Categories
 *
 * ## Not Found
 *
 * A mutation addressed a marker id that is not in the collection. The
 * response body for this case is fixed so clients can match on it.
 *
 * ## Persistence Errors
 *
 * The document store or photo store failed underneath a mutation. The
 * client gets a short operation-level message; the underlying cause is
 * logged server-side.
 *
 * ## Handler Errors
 *
 * Anything else a handler rejects: bad credentials, malformed multipart
 * payloads, missing headers. The status code travels with the error.
 */
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur in the backend.
/// Each variant can be converted to an HTTP response.
///
/// # Usage
///
/// ```rust
/// use mapmark::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found();
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
///
/// let err = BackendError::persistence("Error saving marker");
/// assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The addressed marker id is not in the collection
    ///
    /// Always maps to 404 with the message "Marker not found".
    #[error("Marker not found")]
    NotFound,

    /// Reading or writing persisted marker state failed
    ///
    /// The message describes the operation that failed, not the cause;
    /// the cause is logged where the error is raised.
    #[error("Persistence error: {message}")]
    Persistence {
        /// Operation-level error message returned to the client
        message: String,
    },

    /// Handler error (e.g., bad credentials, malformed upload)
    ///
    /// This error occurs when processing HTTP requests fails due to
    /// invalid input or failed preconditions.
    #[error("Handler error: {message}")]
    Handler {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create a not-found error for a missing marker
    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Create a persistence error with an operation-level message
    ///
    /// # Arguments
    ///
    /// * `message` - Error message returned to the client
    ///
    /// # Example
    ///
    /// ```rust
    /// use mapmark::backend::error::BackendError;
    ///
    /// let err = BackendError::persistence("Error deleting marker");
    /// assert_eq!(err.message(), "Error deleting marker");
    /// ```
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    /// Create a new handler error with a status code
    ///
    /// # Arguments
    ///
    /// * `status` - HTTP status code
    /// * `message` - Error message
    ///
    /// # Example
    ///
    /// ```rust
    /// use mapmark::backend::error::BackendError;
    /// use axum::http::StatusCode;
    ///
    /// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
    /// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    /// ```
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Handler {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404 Not Found
    /// - `Persistence` - 500 Internal Server Error
    /// - `Handler` - Uses the status code from the error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Handler { status, .. } => *status,
        }
    }

    /// Get the error message as sent to the client
    pub fn message(&self) -> String {
        match self {
            Self::NotFound => "Marker not found".to_string(),
            Self::Persistence { message } => message.clone(),
            Self::Handler { message, .. } => message.clone(),
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        Self::Persistence {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = BackendError::not_found();
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(error.message(), "Marker not found");
    }

    #[test]
    fn test_persistence_error() {
        let error = BackendError::persistence("Error saving marker");
        match &error {
            BackendError::Persistence { message } => {
                assert_eq!(message, "Error saving marker");
            }
            _ => panic!("Expected Persistence"),
        }
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_handler_error() {
        let error = BackendError::handler(StatusCode::UNAUTHORIZED, "Invalid credentials");
        match &error {
            BackendError::Handler { status, message } => {
                assert_eq!(*status, StatusCode::UNAUTHORIZED);
                assert_eq!(message, "Invalid credentials");
            }
            _ => panic!("Expected Handler"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            BackendError::not_found().status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            BackendError::persistence("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            BackendError::handler(StatusCode::BAD_REQUEST, "x").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_from_store_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: BackendError = StoreError::Io(io).into();

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.message().contains("denied"));
    }
}
