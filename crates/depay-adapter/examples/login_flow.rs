/*
[INPUT]:  Account credentials and a running DePay API
[OUTPUT]: Established session plus PIN verification
[POS]:    Examples - login and PIN flow demonstration
[UPDATE]: When auth flow changes
*/

use depay_adapter::*;

/// Example: Login and PIN verification flow
///
/// This example demonstrates the authentication sequence:
/// 1. Create HTTP client
/// 2. Login with email and password
/// 3. Set a PIN if the account has none yet
/// 4. Verify the PIN to unlock dashboard access
#[tokio::main]
async fn main() {
    println!("=== DePay Login Example ===\n");

    // Step 1: Create HTTP client (defaults to a local API)
    let client = match DepayClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    // Step 2: Login
    let email = std::env::var("DEPAY_EMAIL").unwrap_or_else(|_| "demo@depay.io".to_string());
    let password = std::env::var("DEPAY_PASSWORD").unwrap_or_else(|_| "Demo1234".to_string());

    let login = match client.login(&email, &password).await {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Login failed: {}", e);
            return;
        }
    };
    println!("✓ Logged in as {}", email);

    // Step 3: First-time accounts have to pick a PIN before anything else
    if login.has_set_pin == Some(false) {
        match client.set_pin("1234").await {
            Ok(response) => println!("✓ {}", response.message),
            Err(e) => {
                eprintln!("Setting PIN failed: {}", e);
                return;
            }
        }
    }

    // Step 4: Verify the PIN the way the dashboard gate does
    match client.verify_pin("1234").await {
        Ok(response) => println!("✓ {}", response.message),
        Err(e) => eprintln!("PIN rejected: {}", e),
    }

    println!("\n✓ Login example complete");
}
