/**
 * Session Management
 *
 * This module tracks which tokens belong to live sessions. Tokens are
 * random UUIDs handed out at login and held in memory only; restarting
 * the server logs everyone out, which is acceptable for a single shared
 * workspace.
 */
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// In-memory registry of live session tokens
///
/// Clone is cheap; all clones share the same token set.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    tokens: Arc<Mutex<HashSet<String>>>,
}

impl SessionStore {
    /// Create an empty session store
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a new session token and register it
    ///
    /// # Returns
    /// The token to hand back to the client as a bearer credential
    pub async fn create(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens.lock().await.insert(token.clone());
        tracing::info!("[Sessions] Session created");
        token
    }

    /// True when the token belongs to a live session
    pub async fn validate(&self, token: &str) -> bool {
        self.tokens.lock().await.contains(token)
    }

    /// End a session
    ///
    /// # Returns
    /// True if the token was live, false if it was unknown or already
    /// revoked
    pub async fn revoke(&self, token: &str) -> bool {
        let removed = self.tokens.lock().await.remove(token);
        if removed {
            tracing::info!("[Sessions] Session revoked");
        }
        removed
    }
}
