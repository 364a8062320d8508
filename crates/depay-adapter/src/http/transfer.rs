/*
[INPUT]:  Transfer details (receiver, amount, note) plus the sender's PIN
[OUTPUT]: Ledger confirmation with transaction id and timestamp
[POS]:    HTTP layer - money movement endpoint (requires auth)
[UPDATE]: When the transaction contract changes
*/

use crate::http::{DepayClient, Result};
use crate::types::{TransferRequest, TransferResponse};
use reqwest::Method;
use rust_decimal::Decimal;

impl DepayClient {
    /// Submit a transfer to another account
    ///
    /// POST /api/blockchain/transaction
    ///
    /// The PIN travels with the request; the server uses it to unlock the
    /// sender's signing key, so a wrong PIN rejects the whole transfer.
    pub async fn submit_transaction(
        &self,
        receiver_account: &str,
        amount: Decimal,
        note: Option<&str>,
        pin: &str,
    ) -> Result<TransferResponse> {
        let request = TransferRequest {
            receiver_account: receiver_account.to_string(),
            amount,
            note: note.map(str::to_string),
            pin: pin.to_string(),
        };

        let builder = self
            .authed_request(Method::POST, "/api/blockchain/transaction")?
            .json(&request);
        let response: TransferResponse = self.send_json(builder).await?;

        tracing::info!(
            receiver = %receiver_account,
            amount = %amount,
            txn_id = %response.txn_id,
            "transfer accepted"
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, DepayClient};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn dec(value: &str) -> rust_decimal::Decimal {
        value.parse().expect("decimal")
    }

    #[tokio::test]
    async fn test_submit_transaction() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "message": "Transaction created, balances updated.",
            "txn_id": "c0f6f1f2",
            "time": "2026-08-14 09:12:44"
        }"#;

        let _mock = Mock::given(method("POST"))
            .and(path("/api/blockchain/transaction"))
            .and(header("authorization", "Bearer jwt_abc"))
            .and(body_json(json!({
                "receiver_account": "55100200",
                "amount": 40.5,
                "note": "Lunch",
                "pin": "1234"
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client =
            DepayClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
                .expect("client init");
        client
            .session()
            .establish("jwt_abc".to_string(), "amina@depay.io".to_string());

        let response = client
            .submit_transaction("55100200", dec("40.5"), Some("Lunch"), "1234")
            .await
            .expect("submit_transaction failed");

        assert_eq!(response.txn_id, "c0f6f1f2");
    }

    #[tokio::test]
    async fn test_submit_transaction_insufficient_balance() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/api/blockchain/transaction"))
            .respond_with(
                ResponseTemplate::new(400)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(r#"{ "error": "Insufficient balance" }"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client =
            DepayClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
                .expect("client init");
        client
            .session()
            .establish("jwt_abc".to_string(), "amina@depay.io".to_string());

        let err = client
            .submit_transaction("55100200", dec("9999"), None, "1234")
            .await
            .expect_err("transfer should fail");

        assert_eq!(err.server_message(), Some("Insufficient balance"));
        assert!(!err.is_auth_error());
    }
}
