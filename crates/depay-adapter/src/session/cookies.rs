/*
[INPUT]:  Cookie writes from the auth and PIN flows
[OUTPUT]: Expiry-checked cookie reads for route guarding
[POS]:    Session layer - client-side cookie jar
[UPDATE]: When adding cookies or changing expiry semantics
*/

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Cookie holding the login session marker
pub const AUTH_TOKEN: &str = "authToken";

/// Cookie marking a completed PIN verification
pub const PIN_VERIFIED: &str = "pinVerified";

/// Lifetime of the PIN verification marker, in seconds
pub const PIN_VERIFIED_MAX_AGE_SECS: u64 = 3600;

/// A single stored cookie
#[derive(Debug, Clone)]
pub struct Cookie {
    pub value: String,
    pub path: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// In-memory cookie jar
///
/// Reads treat an expired cookie as absent, so a stale `pinVerified`
/// marker sends the user back through PIN verification instead of
/// letting it linger.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    cookies: HashMap<String, Cookie>,
}

impl CookieJar {
    /// Create an empty jar
    pub fn new() -> Self {
        Self {
            cookies: HashMap::new(),
        }
    }

    /// Set a cookie, computing its expiry from `max_age_seconds`
    pub fn set(&mut self, name: &str, value: &str, path: &str, max_age_seconds: Option<u64>) {
        let expires_at = max_age_seconds.map(|secs| Utc::now() + Duration::seconds(secs as i64));
        self.insert(
            name,
            Cookie {
                value: value.to_string(),
                path: path.to_string(),
                expires_at,
            },
        );
    }

    /// Insert a fully specified cookie
    pub fn insert(&mut self, name: &str, cookie: Cookie) {
        self.cookies.insert(name.to_string(), cookie);
    }

    /// Get a cookie value, treating expired cookies as absent
    pub fn get(&self, name: &str) -> Option<&str> {
        let cookie = self.cookies.get(name)?;
        if let Some(expires_at) = cookie.expires_at {
            if Utc::now() > expires_at {
                return None;
            }
        }
        Some(cookie.value.as_str())
    }

    /// Check cookie presence, with the same expiry handling as `get`
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove a cookie by name
    pub fn remove(&mut self, name: &str) {
        self.cookies.remove(name);
    }

    /// Drop every cookie in the jar
    pub fn clear(&mut self) {
        self.cookies.clear();
    }

    /// Record the login session marker
    ///
    /// Session-scoped, so no max-age: it lives until logout clears it.
    pub fn set_auth_token(&mut self, token: &str) {
        self.set(AUTH_TOKEN, token, "/", None);
    }

    /// Record a completed PIN verification, valid for one hour
    pub fn mark_pin_verified(&mut self) {
        self.set(PIN_VERIFIED, "true", "/", Some(PIN_VERIFIED_MAX_AGE_SECS));
    }

    /// Check whether PIN verification is currently in effect
    pub fn is_pin_verified(&self) -> bool {
        self.get(PIN_VERIFIED) == Some("true")
    }
}
