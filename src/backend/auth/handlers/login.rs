/**
 * Login Handler
 *
 * This module implements the workspace login handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Check the presented pair against the workspace authenticator
 * 2. Mint a session token on success
 * 3. Return the token for use as a bearer credential
 *
 * # Security
 *
 * This is a shared-credential gate, not per-user identity. Invalid
 * credentials return 401 with a fixed message; passwords are never
 * logged.
 */
use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::server::state::AppState;

/// Login handler
///
/// Verifies the shared workspace credentials and mints a session token
/// if they match.
///
/// # Arguments
///
/// * `State(state)` - Application state with the authenticator and sessions
/// * `Json(request)` - Login request containing username and password
///
/// # Returns
///
/// `200 {"success": true, "token": "..."}` on success,
/// `401 {"success": false, "message": "Invalid credentials"}` otherwise
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "admin", "password": "password123"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"success": true, "token": "8f41e3f2-0c7e-4b59-9f51-6a9a4dfb2f10"}
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> (StatusCode, Json<LoginResponse>) {
    tracing::info!("[Auth] Login request for: {}", request.username);

    if !state
        .authenticator
        .authenticate(&request.username, &request.password)
    {
        tracing::warn!("[Auth] Invalid credentials for: {}", request.username);
        return (StatusCode::UNAUTHORIZED, Json(LoginResponse::denied()));
    }

    let token = state.sessions.create().await;
    tracing::info!("[Auth] Login granted for: {}", request.username);

    (StatusCode::OK, Json(LoginResponse::granted(token)))
}
