/*
[INPUT]:  Session tokens issued at login
[OUTPUT]: Token retrieval and session status
[POS]:    Session layer - bearer token lifecycle management
[UPDATE]: When adding token refresh or changing storage strategy
*/

use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};

/// Stored session data with metadata
#[derive(Debug, Clone)]
pub struct SessionData {
    pub token: String,
    pub email: String,
    pub established_at: DateTime<Utc>,
}

/// Thread-safe session token store
#[derive(Debug, Clone)]
pub struct SessionStore {
    data: Arc<RwLock<Option<SessionData>>>,
}

impl SessionStore {
    /// Create a new empty session store
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(None)),
        }
    }

    /// Store the token returned by a successful login
    pub fn establish(&self, token: String, email: String) {
        let session = SessionData {
            token,
            email,
            established_at: Utc::now(),
        };

        let mut guard = self.data.write().unwrap();
        *guard = Some(session);
    }

    /// Get the current bearer token if available
    pub fn token(&self) -> Option<String> {
        let guard = self.data.read().unwrap();
        guard.as_ref().map(|data| data.token.clone())
    }

    /// Get the email the session was established for
    pub fn email(&self) -> Option<String> {
        let guard = self.data.read().unwrap();
        guard.as_ref().map(|data| data.email.clone())
    }

    /// Check whether a session is currently established
    pub fn is_authenticated(&self) -> bool {
        let guard = self.data.read().unwrap();
        guard.is_some()
    }

    /// Get session data if available
    pub fn session_data(&self) -> Option<SessionData> {
        let guard = self.data.read().unwrap();
        guard.clone()
    }

    /// Clear the stored session
    pub fn clear(&self) {
        let mut guard = self.data.write().unwrap();
        *guard = None;
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = SessionStore::new();
        assert!(store.token().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_establish_and_read() {
        let store = SessionStore::new();
        store.establish("jwt_abc".to_string(), "user@depay.io".to_string());

        assert_eq!(store.token(), Some("jwt_abc".to_string()));
        assert_eq!(store.email(), Some("user@depay.io".to_string()));
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_clear_session() {
        let store = SessionStore::new();
        store.establish("jwt_abc".to_string(), "user@depay.io".to_string());

        store.clear();
        assert!(store.token().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new();
        let handle = store.clone();
        handle.establish("jwt_abc".to_string(), "user@depay.io".to_string());

        assert_eq!(store.token(), Some("jwt_abc".to_string()));
    }
}
