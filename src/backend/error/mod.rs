//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - Error conversion implementations (IntoResponse, etc.)
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Types
//!
//! - `NotFound` - The addressed marker does not exist (404)
//! - `Persistence` - Marker state could not be read or written (500)
//! - `Handler` - Request-level failures with an explicit status code
//!
//! # HTTP Response Conversion
//!
//! All backend errors implement `IntoResponse` from Axum, allowing them to be
//! returned directly from handlers. The error is automatically converted to an
//! appropriate HTTP status code and a JSON body of the form
//! `{"error": "message"}`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
