//! Middleware Module
//!
//! This module contains all HTTP middleware for the backend server.
//! Middleware functions are used to process requests before they reach
//! handlers.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - Session-gate middleware for the protected editor mount

pub mod auth;

pub use auth::require_session;
