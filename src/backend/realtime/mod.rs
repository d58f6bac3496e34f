//! Real-time Update Module
//!
//! This module pushes marker state to connected clients. Every accepted
//! mutation results in one `marker-updated` event carrying the complete
//! collection, and every new subscriber receives the current collection
//! immediately on connect.
//!
//! # Architecture
//!
//! The realtime module is organized into focused submodules:
//!
//! - **`broadcast`** - Snapshot broadcasting utilities and type definitions
//! - **`subscription`** - Server-Sent Events subscription handler
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - Snapshot broadcasting utilities
//! └── subscription.rs - SSE subscription handler
//! ```
//!
//! # Real-time System
//!
//! The real-time system uses Server-Sent Events (SSE) to provide one-way
//! communication from server to client. This is simpler than WebSockets
//! for one-way communication and works well with HTTP/2.
//!
//! # Full-State Pushes
//!
//! There is exactly one event name, `marker-updated`, and its payload is
//! always the complete marker collection. Clients never patch individual
//! markers from the wire; they replace or reconcile their whole view.

/// Snapshot broadcasting utilities
pub mod broadcast;

/// Server-Sent Events subscription handler
pub mod subscription;

// Re-export commonly used types and functions
pub use broadcast::{broadcast_collection, MarkerBroadcast};
pub use subscription::handle_marker_subscription;
