/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public DePay adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod session;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    DepayClient,
    DepayError,
    Result,
};

// Re-export commonly used types from session
pub use session::{
    AUTH_TOKEN,
    Cookie,
    CookieJar,
    PIN_VERIFIED,
    PIN_VERIFIED_MAX_AGE_SECS,
    SessionData,
    SessionStore,
};

// Re-export all types
pub use types::*;
