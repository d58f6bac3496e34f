//! Authentication Module
//!
//! This module implements the workspace gate: one shared credential
//! pair, in-memory bearer sessions, and the login/logout endpoints.
//! The marker API itself is open; only the editor page mount is gated.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`credentials`** - The `Authenticator` capability and the shared pair
//! - **`sessions`** - Session token minting and validation
//! - **`handlers`** - HTTP handlers for login and logout
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── credentials.rs  - Authenticator trait and shared credential
//! ├── sessions.rs     - In-memory session store
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── login.rs    - Workspace login handler
//!     └── logout.rs   - Session teardown handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: Client presents the shared pair → session token returned
//! 2. **Gated routes**: `Authorization: Bearer <token>` checked by middleware
//! 3. **Logout**: Token revoked
//!
//! # Security
//!
//! - The credential check sits behind the `Authenticator` trait so real
//!   identity can replace the shared pair without touching marker code
//! - Sessions are anonymous; the server only knows "admitted" or not
//! - Invalid credentials return 401 with a fixed message

/// Authenticator trait and the shared workspace credential
pub mod credentials;

/// Session token minting and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use credentials::{Authenticator, SharedCredential};
pub use handlers::types::{LoginRequest, LoginResponse, LogoutResponse};
pub use handlers::{login, logout};
pub use sessions::SessionStore;
