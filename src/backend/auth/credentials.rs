/**
 * Workspace Credentials
 *
 * This module defines the authentication capability behind the login
 * endpoint. The workspace uses one shared credential pair with no
 * per-user identity, so the check is deliberately small; the trait seam
 * exists so real identity can replace it later without touching the
 * marker code.
 */

/// Decides whether a presented credential pair grants workspace access
pub trait Authenticator: Send + Sync {
    /// True when the given username and password are accepted
    fn authenticate(&self, username: &str, password: &str) -> bool;
}

/// Single shared username/password pair for the whole workspace
///
/// Every editor logs in with the same pair; sessions are anonymous
/// beyond "was admitted through this gate".
#[derive(Debug, Clone)]
pub struct SharedCredential {
    username: String,
    password: String,
}

impl SharedCredential {
    /// Create the shared credential pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Authenticator for SharedCredential {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_matching_pair() {
        let auth = SharedCredential::new("admin", "password123");
        assert!(auth.authenticate("admin", "password123"));
    }

    #[test]
    fn test_rejects_wrong_password() {
        let auth = SharedCredential::new("admin", "password123");
        assert!(!auth.authenticate("admin", "wrong"));
    }

    #[test]
    fn test_rejects_wrong_username() {
        let auth = SharedCredential::new("admin", "password123");
        assert!(!auth.authenticate("root", "password123"));
    }

    #[test]
    fn test_rejects_empty_pair() {
        let auth = SharedCredential::new("admin", "password123");
        assert!(!auth.authenticate("", ""));
    }
}
