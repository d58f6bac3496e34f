//! Mapmark - Main Library
//!
//! Mapmark is a collaborative map-marker server built with Rust. A
//! shared collection of point-of-interest markers is persisted as a
//! single JSON document, enriched with uploaded photos, and pushed to
//! every connected viewer in real time over SSE.
//!
//! # Overview
//!
//! This library provides the core functionality for mapmark, including:
//! - Marker collection CRUD with whole-document persistence
//! - Photo upload, attachment, and blob storage
//! - Real-time full-collection broadcasts to connected viewers
//! - A workspace credential gate with bearer-token sessions
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared between server and clients
//!   - Marker record and collection types
//!   - Snapshot reconciliation for client-side caches
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server with marker and photo endpoints
//!   - Marker service with a single commit lock
//!   - Document and blob stores
//!   - Session gate and real-time broadcasting
//!
//! # Usage
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
//!
//! # Architecture
//!
//! The application follows a modular architecture:
//!
//! - **Shared Types**: Platform-agnostic types for serialization
//! - **Backend**: Axum server over a whole-document marker store
//!
//! # Concurrency Model
//!
//! The marker collection is small enough to persist as one document,
//! so every mutation is a read-modify-write of the full collection.
//! The marker service serializes those sequences behind a single
//! commit lock and broadcasts the committed collection before the
//! lock is released, which keeps the push order identical to the
//! commit order. Reads bypass the lock entirely.
//!
//! # Error Handling
//!
//! The library uses Rust's standard error handling:
//!
//! - `Result<T, E>` for fallible operations
//! - `Option<T>` for optional values
//! - Custom error types in `backend::error` and `backend::store`

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
