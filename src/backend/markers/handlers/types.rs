/**
 * Marker Handler Types
 *
 * Response bodies for the marker mutation endpoints. Clients key off
 * the `success` flag, and the upload response additionally carries the
 * marker's complete photo list after the attach.
 */
use serde::{Deserialize, Serialize};

/// Body returned by mutation endpoints on success
///
/// # Example
///
/// ```json
/// {
///   "success": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MutationResponse {
    /// Always `true`; failures are reported through error responses
    pub success: bool,
}

impl MutationResponse {
    /// A successful mutation acknowledgement
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Body returned by the photo upload endpoint on success
///
/// # Example
///
/// ```json
/// {
///   "success": true,
///   "photos": ["1700000000000-pier.jpg", "1700000000042-bay.jpg"]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    /// Always `true`; failures are reported through error responses
    pub success: bool,
    /// The marker's full photo list after the new blobs were attached
    pub photos: Vec<String>,
}

impl UploadResponse {
    /// A successful upload acknowledgement with the updated photo list
    pub fn ok(photos: Vec<String>) -> Self {
        Self {
            success: true,
            photos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_response_wire_format() {
        let json = serde_json::to_value(MutationResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({"success": true}));
    }

    #[test]
    fn test_upload_response_wire_format() {
        let response = UploadResponse::ok(vec!["1-a.jpg".to_string()]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": true, "photos": ["1-a.jpg"]})
        );
    }
}
