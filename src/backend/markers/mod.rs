//! Markers Module
//!
//! The core of the server: authoritative marker state and the endpoints
//! that mutate it. All mutation paths converge on `MarkerService`, which
//! serializes commits and broadcasts the complete collection after each
//! one.
//!
//! # Architecture
//!
//! - **`service`** - Read-modify-write mutation logic behind a commit lock
//! - **`handlers`** - Axum handlers for the marker endpoints
//!
//! # Module Structure
//!
//! ```text
//! markers/
//! ├── mod.rs     - Module exports and documentation
//! ├── service.rs - Marker mutation service
//! └── handlers/  - HTTP handlers
//! ```

/// Marker mutation service
pub mod service;

/// HTTP handlers for the marker endpoints
pub mod handlers;

// Re-export commonly used types
pub use service::MarkerService;
