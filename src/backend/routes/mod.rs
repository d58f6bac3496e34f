//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Architecture
//!
//! The routes module is organized into focused submodules:
//!
//! - **`router`** - Main router creation and route assembly
//! - **`marker_routes`** - Marker API routes (collection, photos)
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs            - Module exports and documentation
//! ├── router.rs         - Main router creation
//! └── marker_routes.rs  - Marker API route configuration
//! ```
//!
//! # Route Organization
//!
//! Routes are added in a specific order to ensure proper matching:
//!
//! 1. **Real-time Route** - SSE subscription for marker snapshots
//! 2. **Session Routes** - Login and logout
//! 3. **Marker Routes** - Collection and photo endpoints
//! 4. **Static Mounts** - Photo directory and gated workspace UI
//! 5. **Fallback Handler** - 404 errors
//!
//! # Route Types
//!
//! ## Real-time Route
//!
//! - `GET /events` - SSE stream of `marker-updated` collection snapshots
//!
//! ## Session Routes
//!
//! - `POST /login` - Workspace login, returns a bearer token
//! - `POST /logout` - Revokes the presented bearer token
//!
//! ## Marker Routes
//!
//! - `GET /markers` - Fetch the full marker collection
//! - `POST /markers` - Upsert one marker by id
//! - `DELETE /markers/{id}` - Delete a marker and its photos
//! - `POST /upload/{id}` - Upload photos and attach them to a marker
//! - `DELETE /photos/{marker_id}/{photo}` - Detach and delete one photo
//!
//! ## Static Mounts
//!
//! - `/pictures/*` - Stored photo blobs, served read-only
//! - `/app/*` - Workspace UI, session-gated
//!
//! # Example
//!
//! ```rust,no_run
//! use mapmark::backend::server::config::ServerConfig;
//! use mapmark::backend::server::create_app;
//!
//! # async fn example() -> Result<(), mapmark::backend::store::StoreError> {
//! let config = ServerConfig::from_env();
//! let router = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// Marker API route configuration
pub mod marker_routes;

// Re-export commonly used functions
pub use router::create_router;
