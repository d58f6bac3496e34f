//! Server Module
//!
//! This module contains all server-side code for initializing and configuring
//! the Axum HTTP server. It provides the foundation for the application's
//! backend infrastructure.
//!
//! # Architecture
//!
//! The server module is organized into focused submodules:
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Configuration loading from the environment
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading (port, paths, credentials)
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # State Management
//!
//! The server uses `AppState` as the central state container, which holds:
//! - The marker service (document store, photo store, broadcast channel)
//! - The session store for workspace access tokens
//! - The workspace authenticator
//!
//! State is shared across all request handlers using `Arc` for thread-safe
//! concurrent access.
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: Reads port, paths, and credentials from env
//! 2. **Store Opening**: Opens the marker document and photo directory
//! 3. **Service Creation**: Builds the marker service and broadcast channel
//! 4. **Router Creation**: Configures all routes and middleware
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
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
