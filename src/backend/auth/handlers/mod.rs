//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the workspace gate.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs    - Module exports and documentation
//! ├── types.rs  - Request and response types
//! ├── login.rs  - Workspace login handler
//! └── logout.rs - Session teardown handler
//! ```
//!
//! # Handlers
//!
//! - **`login`** - POST /login - Verify the shared credentials, mint a session
//! - **`logout`** - POST /logout - Revoke the presented session
//!
//! # Authentication Flow
//!
//! 1. **Login**: Client presents the shared pair → token minted → token returned
//! 2. **Requests**: Client sends `Authorization: Bearer <token>` to gated routes
//! 3. **Logout**: Token revoked → token stops validating
//!
//! # Security
//!
//! - One shared credential pair, no per-user identity
//! - Sessions are in-memory; a restart logs everyone out
//! - Invalid credentials return 401 with a fixed message

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

// Re-export commonly used types
pub use types::{LoginRequest, LoginResponse, LogoutResponse};

// Re-export handlers
pub use login::login;
pub use logout::logout;
