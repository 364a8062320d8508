/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for depay-adapter tests

use serde_json::{Value, json};
use uuid::Uuid;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Mock JWT token for testing
pub fn mock_jwt_token() -> String {
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.test.signature".to_string()
}

/// Unique email address per test run
#[allow(dead_code)]
pub fn unique_email() -> String {
    format!("user-{}@depay.io", Uuid::new_v4())
}

/// Account details body as the server sends it
#[allow(dead_code)]
pub fn details_json() -> Value {
    json!({
        "first_name": "Amina",
        "last_name": "Yusuf",
        "full_name": "Amina Yusuf",
        "balance": 1520.75,
        "accountNumber": "93001122",
        "email": "amina@depay.io"
    })
}

/// Transaction history body as the server sends it
#[allow(dead_code)]
pub fn transactions_json() -> Value {
    json!({
        "transactions": [
            {
                "_id": "66b2f1c09d1e8a0f3c11a901",
                "type": "received",
                "amount": 250,
                "timestamp": "Sat, 01 Aug 2026 10:45:00 GMT",
                "sender": { "account": "18220011", "name": "Alex Reyes" },
                "receiver": { "account": "93001122", "name": "Amina Yusuf" }
            },
            {
                "_id": "66b2f1c09d1e8a0f3c11a902",
                "type": "send",
                "amount": 40.5,
                "note": "Lunch",
                "timestamp": "Sun, 02 Aug 2026 18:30:00 GMT",
                "sender": { "account": "93001122", "name": "Amina Yusuf" },
                "receiver": { "account": "55100200", "name": "Priya Nair" }
            }
        ]
    })
}
