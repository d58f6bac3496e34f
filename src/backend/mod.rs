//! Backend Module
//!
//! This module contains all server-side code for the mapmark application.
//! It provides a complete Axum HTTP server for the shared map-marker
//! workspace: a persisted marker collection, photo attachments, and
//! real-time collection broadcasts.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - Marker collection endpoints (list, upsert, delete)
//! - Photo upload, serving, and detach endpoints
//! - Real-time collection snapshot broadcasting over SSE
//! - Workspace session gate (login, logout, middleware)
//! - Whole-document JSON persistence and photo blob storage
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`markers`** - Marker service and HTTP handlers
//! - **`store`** - Marker document and photo blob persistence
//! - **`auth`** - Workspace credential gate and sessions
//! - **`realtime`** - Collection snapshot broadcasting
//! - **`middleware`** - Request processing middleware
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── markers/        - Marker service and handlers
//! ├── store/          - Document and blob persistence
//! ├── auth/           - Workspace session gate
//! ├── realtime/       - Snapshot broadcasting
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! The backend uses shared state (`AppState`) that contains:
//! - The marker service (stores, commit lock, broadcast channel)
//! - The session store for workspace access tokens
//! - The workspace authenticator
//!
//! Every read-modify-write on the marker collection runs under the
//! service's commit lock, so concurrent mutations serialize and the
//! broadcast order matches the commit order. Broadcast channels use
//! `tokio::sync::broadcast` for efficient multi-subscriber messaging.
//!
//! # Real-time Protocol
//!
//! Connected viewers receive the full collection over SSE:
//!
//! - `GET /events` opens the stream and immediately receives the
//!   current collection as a `marker-updated` event
//! - Every committed mutation pushes a fresh `marker-updated` snapshot
//!   to all viewers
//!
//! # Error Handling
//!
//! The backend uses standard HTTP status codes and custom error types:
//! - `BackendError` for handler errors
//! - `StoreError` for persistence errors
//! - Proper error propagation with `?` operator
//!
//! # Example
//!
//! ```rust,no_run
//! use mapmark::backend::server::config::ServerConfig;
//! use mapmark::backend::server::create_app;
//!
//! # async fn example() -> Result<(), mapmark::backend::store::StoreError> {
//! let config = ServerConfig::from_env();
//! let app = create_app(&config).await?;
//! // Use app with Axum server
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Marker service and handlers
pub mod markers;

/// Document and blob persistence
pub mod store;

/// Real-time snapshot broadcasting
pub mod realtime;

/// Backend error types
pub mod error;

/// Workspace session gate
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::BackendError;
pub use markers::MarkerService;
pub use realtime::{broadcast_collection, handle_marker_subscription, MarkerBroadcast};
pub use server::create_app;
pub use store::{MarkerStore, PhotoStore, StoreError};
