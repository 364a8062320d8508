/*
[INPUT]:  An established session against a running DePay API
[OUTPUT]: Printed account profile, balance and recent transactions
[POS]:    Examples - account data demonstration
[UPDATE]: When account endpoints change
*/

use depay_adapter::*;

/// Example: Account overview
///
/// Logs in and prints what the dashboard shows: profile, balance and the
/// most recent transactions.
#[tokio::main]
async fn main() {
    println!("=== DePay Account Overview Example ===\n");

    let client = match DepayClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let email = std::env::var("DEPAY_EMAIL").unwrap_or_else(|_| "demo@depay.io".to_string());
    let password = std::env::var("DEPAY_PASSWORD").unwrap_or_else(|_| "Demo1234".to_string());

    if let Err(e) = client.login(&email, &password).await {
        eprintln!("Login failed: {}", e);
        return;
    }
    println!("✓ Logged in as {}", email);

    match client.account_details().await {
        Ok(details) => {
            println!("\nAccount: {} ({})", details.full_name, details.account_number);
            println!("Balance: {}", details.balance);
        }
        Err(e) => eprintln!("Fetching details failed: {}", e),
    }

    match client.transactions().await {
        Ok(history) => {
            println!("\nRecent transactions:");
            for record in history.transactions.iter().take(4) {
                println!(
                    "  {:?} {} ({}) on {}",
                    record.direction,
                    record.amount,
                    record.counterparty(),
                    record.timestamp
                );
            }
        }
        Err(e) => eprintln!("Fetching transactions failed: {}", e),
    }

    println!("\n✓ Account overview complete");
}
