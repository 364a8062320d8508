/*
[INPUT]:  Session bearer tokens and account lookups
[OUTPUT]: Account profile, balances and transaction history
[POS]:    HTTP layer - account data endpoints (require auth)
[UPDATE]: When adding new account endpoints or changing response format
*/

use crate::http::{DepayClient, Result};
use crate::types::{AccountDetails, AccountLookupResponse, TransactionsResponse};
use reqwest::Method;

impl DepayClient {
    /// Fetch profile and balance for the logged-in account
    ///
    /// GET /api/accounts/details
    pub async fn account_details(&self) -> Result<AccountDetails> {
        let builder = self.authed_request(Method::GET, "/api/accounts/details")?;
        self.send_json(builder).await
    }

    /// Fetch the transaction history for the logged-in account
    ///
    /// GET /api/accounts/transactions
    pub async fn transactions(&self) -> Result<TransactionsResponse> {
        let builder = self.authed_request(Method::GET, "/api/accounts/transactions")?;
        self.send_json(builder).await
    }

    /// Look up the holder of an account number before transferring to it
    ///
    /// GET /api/accounts/verify?accountNumber={account_number}
    pub async fn lookup_account(&self, account_number: &str) -> Result<AccountLookupResponse> {
        let endpoint = format!("/api/accounts/verify?accountNumber={}", account_number);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }
}
