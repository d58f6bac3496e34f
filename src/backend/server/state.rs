/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The marker service (stores, commit lock, broadcast sender)
 * - The session store for the workspace gate
 * - The authenticator behind the login endpoint
 *
 * # Thread Safety
 *
 * All state is designed to be thread-safe:
 * - `Arc<MarkerService>` shares one service across handlers; the
 *   service serializes its own mutations internally
 * - `SessionStore` clones share one token set
 * - The authenticator is immutable after startup
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`. This follows
 * Axum's recommended pattern for state management.
 */
use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::credentials::Authenticator;
use crate::backend::auth::sessions::SessionStore;
use crate::backend::markers::MarkerService;

/// Application state shared by every handler
///
/// # Fields
///
/// * `markers` - The marker mutation service
/// * `sessions` - Live workspace sessions
/// * `authenticator` - Credential check behind the login endpoint
#[derive(Clone)]
pub struct AppState {
    /// The marker mutation service
    ///
    /// Owns the document store, photo store, and broadcast channel.
    /// Handlers never touch the stores directly.
    pub markers: Arc<MarkerService>,

    /// Live workspace sessions for the gated editor mount
    pub sessions: SessionStore,

    /// Credential check behind the login endpoint
    ///
    /// Behind a trait so the shared pair can be swapped for real
    /// identity later.
    pub authenticator: Arc<dyn Authenticator>,
}

/// Implement FromRef for the marker service
///
/// This allows Axum handlers to extract `Arc<MarkerService>` directly
/// from `AppState` using `State(markers)`.
impl FromRef<AppState> for Arc<MarkerService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.markers.clone()
    }
}

/// Implement FromRef for the session store
///
/// This allows Axum handlers and middleware to extract `SessionStore`
/// directly from `AppState`.
impl FromRef<AppState> for SessionStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
