/*
[INPUT]:  Login results and PIN verification outcomes
[OUTPUT]: Bearer tokens and guard-readable cookies
[POS]:    Session layer - authentication state shared across the client
[UPDATE]: When changing how sessions or cookies are tracked
*/

pub mod cookies;
pub mod store;

pub use cookies::{AUTH_TOKEN, Cookie, CookieJar, PIN_VERIFIED, PIN_VERIFIED_MAX_AGE_SECS};
pub use store::{SessionData, SessionStore};
