/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the login
 * and logout handlers.
 */
use serde::{Deserialize, Serialize};

/// Login request
///
/// Contains the shared workspace username and password.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Workspace username
    pub username: String,
    /// Workspace password
    pub password: String,
}

/// Login response
///
/// On success `token` carries the session token to present as a bearer
/// credential; on rejection `message` says why.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    /// Whether the credentials were accepted
    pub success: bool,
    /// Session token, present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Failure reason, present on rejection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginResponse {
    /// A granted login carrying the new session token
    pub fn granted(token: String) -> Self {
        Self {
            success: true,
            token: Some(token),
            message: None,
        }
    }

    /// A rejected login
    pub fn denied() -> Self {
        Self {
            success: false,
            token: None,
            message: Some("Invalid credentials".to_string()),
        }
    }
}

/// Logout response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LogoutResponse {
    /// Always `true`; logging out an unknown session is still a logout
    pub success: bool,
}

impl LogoutResponse {
    /// A successful logout acknowledgement
    pub fn ok() -> Self {
        Self { success: true }
    }
}
