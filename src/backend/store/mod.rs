//! Storage Module
//!
//! Disk persistence for marker state. Marker metadata lives in a single
//! JSON document that is read and replaced whole; photo blobs live as
//! individual files in a flat directory referenced by stored filename.
//!
//! ```text
//! store/
//! ├── mod.rs       - Module organization
//! ├── error.rs     - Storage error types
//! ├── markers.rs   - Whole-document JSON store for the collection
//! └── photos.rs    - Flat-directory blob store for uploads
//! ```

/// Storage error types
pub mod error;

/// Whole-document marker persistence
pub mod markers;

/// Photo blob persistence
pub mod photos;

/// Re-export commonly used types for convenience
pub use error::{StoreError, StoreResult};
pub use markers::MarkerStore;
pub use photos::PhotoStore;
