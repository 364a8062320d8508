/*
[INPUT]:  Authenticated account details + transaction list endpoints
[OUTPUT]: One dashboard snapshot with per-section error capture
[POS]:    Data layer - dashboard aggregation (no rendering logic)
[UPDATE]: When dashboard sections or their failure messages change
*/

use rust_decimal::Decimal;
use tracing::warn;

use depay_adapter::{DepayClient, TransactionRecord};

/// How many transactions the dashboard overview shows
pub const RECENT_TRANSACTIONS: usize = 4;

/// Per-section load failures, keyed by the field they affect
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardErrors {
    pub account: Option<String>,
    pub transactions: Option<String>,
}

/// Everything the dashboard overview renders
///
/// Sections load independently; a failed section keeps its defaults
/// (empty strings, zero balance, empty list) and records its error.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub name: String,
    pub full_name: String,
    pub total_balance: Decimal,
    pub account_number: String,
    pub email: String,
    pub transactions: Vec<TransactionRecord>,
    pub errors: DashboardErrors,
}

impl Default for DashboardData {
    fn default() -> Self {
        Self {
            name: String::new(),
            full_name: String::new(),
            total_balance: Decimal::ZERO,
            account_number: String::new(),
            email: String::new(),
            transactions: Vec::new(),
            errors: DashboardErrors::default(),
        }
    }
}

impl DashboardData {
    /// Fetch both dashboard sections concurrently
    ///
    /// Neither failure aborts the other; each section lands or records
    /// its error on its own.
    pub async fn load(client: &DepayClient) -> Self {
        let (details, transactions) = tokio::join!(client.account_details(), client.transactions());

        let mut data = Self::default();

        match details {
            Ok(details) => {
                data.name = format!("{} {}", details.first_name, details.last_name);
                data.full_name = details.full_name;
                data.total_balance = details.balance;
                data.account_number = details.account_number;
                data.email = details.email;
            }
            Err(err) => {
                warn!(error = %err, "Failed to fetch account details");
                data.errors.account = Some("Error verifying account".to_string());
            }
        }

        match transactions {
            Ok(response) => {
                data.transactions = response.transactions;
            }
            Err(err) => {
                warn!(error = %err, "Failed to fetch transactions");
                data.errors.transactions = Some("Error fetching transactions".to_string());
            }
        }

        data
    }

    /// The slice of transactions the overview renders
    pub fn recent_transactions(&self) -> &[TransactionRecord] {
        let end = self.transactions.len().min(RECENT_TRANSACTIONS);
        &self.transactions[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use depay_adapter::ClientConfig;

    const TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.dashboard-test";

    async fn authed_client(server: &MockServer) -> DepayClient {
        let client =
            DepayClient::with_config_and_base_url(ClientConfig::default(), &server.uri()).unwrap();
        client
            .session()
            .establish(TOKEN.to_string(), "sam@depay.dev".to_string());
        client
    }

    fn details_body() -> serde_json::Value {
        serde_json::json!({
            "first_name": "Sam",
            "last_name": "Carter",
            "full_name": "Sam Carter",
            "balance": 1250.75,
            "accountNumber": "4532015112830366",
            "email": "sam@depay.dev"
        })
    }

    fn transactions_body(count: usize) -> serde_json::Value {
        let transactions: Vec<serde_json::Value> = (0..count)
            .map(|i| {
                serde_json::json!({
                    "_id": format!("txn-{}", i),
                    "type": "received",
                    "amount": 10.0 + i as f64,
                    "timestamp": "Tue, 03 Feb 2026 10:00:00 GMT",
                    "sender": { "account": "18220011", "name": "Alex Reyes" },
                    "receiver": { "account": "4532015112830366", "name": "Sam Carter" }
                })
            })
            .collect();
        serde_json::json!({ "transactions": transactions })
    }

    async fn mount_details(server: &MockServer, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/api/accounts/details"))
            .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
            .respond_with(template)
            .mount(server)
            .await;
    }

    async fn mount_transactions(server: &MockServer, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/api/accounts/transactions"))
            .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
            .respond_with(template)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_load_populates_both_sections() {
        let server = MockServer::start().await;
        mount_details(&server, ResponseTemplate::new(200).set_body_json(details_body())).await;
        mount_transactions(
            &server,
            ResponseTemplate::new(200).set_body_json(transactions_body(2)),
        )
        .await;

        let client = authed_client(&server).await;
        let data = DashboardData::load(&client).await;

        assert_eq!(data.name, "Sam Carter");
        assert_eq!(data.full_name, "Sam Carter");
        assert_eq!(data.total_balance, Decimal::new(125075, 2));
        assert_eq!(data.account_number, "4532015112830366");
        assert_eq!(data.transactions.len(), 2);
        assert_eq!(data.errors, DashboardErrors::default());
    }

    #[tokio::test]
    async fn test_details_failure_keeps_transactions() {
        let server = MockServer::start().await;
        mount_details(
            &server,
            ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "error": "Internal server error"
            })),
        )
        .await;
        mount_transactions(
            &server,
            ResponseTemplate::new(200).set_body_json(transactions_body(1)),
        )
        .await;

        let client = authed_client(&server).await;
        let data = DashboardData::load(&client).await;

        assert_eq!(
            data.errors.account.as_deref(),
            Some("Error verifying account")
        );
        assert_eq!(data.name, "");
        assert_eq!(data.total_balance, Decimal::ZERO);
        assert_eq!(data.transactions.len(), 1);
        assert_eq!(data.errors.transactions, None);
    }

    #[tokio::test]
    async fn test_transactions_failure_keeps_details() {
        let server = MockServer::start().await;
        mount_details(&server, ResponseTemplate::new(200).set_body_json(details_body())).await;
        mount_transactions(&server, ResponseTemplate::new(500)).await;

        let client = authed_client(&server).await;
        let data = DashboardData::load(&client).await;

        assert_eq!(data.name, "Sam Carter");
        assert!(data.transactions.is_empty());
        assert_eq!(
            data.errors.transactions.as_deref(),
            Some("Error fetching transactions")
        );
    }

    #[tokio::test]
    async fn test_recent_transactions_caps_the_list() {
        let server = MockServer::start().await;
        mount_details(&server, ResponseTemplate::new(200).set_body_json(details_body())).await;
        mount_transactions(
            &server,
            ResponseTemplate::new(200).set_body_json(transactions_body(7)),
        )
        .await;

        let client = authed_client(&server).await;
        let data = DashboardData::load(&client).await;

        assert_eq!(data.transactions.len(), 7);
        assert_eq!(data.recent_transactions().len(), RECENT_TRANSACTIONS);
        assert_eq!(data.recent_transactions()[0].id, "txn-0");
    }
}
