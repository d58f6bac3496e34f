//! Marker Handlers Module
//!
//! This module contains all Axum handlers for the marker endpoints:
//! fetch-all, upsert, delete, photo upload, and photo detach.
//!
//! # Architecture
//!
//! The handlers module is organized into focused submodules:
//!
//! - **`list`** - Fetch-all handler (GET /markers)
//! - **`upsert`** - Create-or-replace handler (POST /markers)
//! - **`delete`** - Marker delete handler (DELETE /markers/{id})
//! - **`upload`** - Photo upload handler (POST /upload/{id})
//! - **`photo`** - Photo detach handler (DELETE /photos/{marker_id}/{photo})
//! - **`types`** - Response body types
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs    - Module exports and documentation
//! ├── list.rs   - Fetch-all handler
//! ├── upsert.rs - Create-or-replace handler
//! ├── delete.rs - Marker delete handler
//! ├── upload.rs - Photo upload handler
//! ├── photo.rs  - Photo detach handler
//! └── types.rs  - Response body types
//! ```
//!
//! # Mutation Contract
//!
//! Every mutation handler goes through `MarkerService`, which commits
//! the new collection to disk and pushes it to all subscribers before
//! the handler responds. A `{"success": true}` response therefore means
//! the change is both durable and broadcast.

/// Fetch-all handler
pub mod list;

/// Create-or-replace handler
pub mod upsert;

/// Marker delete handler
pub mod delete;

/// Photo upload handler
pub mod upload;

/// Photo detach handler
pub mod photo;

/// Response body types
pub mod types;

// Re-export commonly used handlers
pub use delete::delete_marker;
pub use list::list_markers;
pub use photo::detach_photo;
pub use types::{MutationResponse, UploadResponse};
pub use upload::upload_photos;
pub use upsert::upsert_marker;
