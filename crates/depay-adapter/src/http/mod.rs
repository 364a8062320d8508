/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod accounts;
pub mod auth;
pub mod client;
pub mod error;
pub mod transfer;

pub use error::{DepayError, Result};

pub use client::{ClientConfig, DepayClient};
