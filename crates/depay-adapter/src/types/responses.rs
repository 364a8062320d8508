/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::TransactionRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "hasSetPin")]
    #[serde(default)]
    pub has_set_pin: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupResponse {
    pub account_number: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateTokenResponse {
    pub valid: bool,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetPinResponse {
    pub message: String,
    #[serde(default)]
    pub account_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyPinResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountLookupResponse {
    pub exists: bool,
    #[serde(rename = "accountNumber")]
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferResponse {
    pub message: String,
    pub txn_id: String,
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_response_without_has_set_pin() {
        let value = json!({ "token": "jwt_abc" });

        let response: LoginResponse =
            serde_json::from_value(value).expect("response should deserialize");

        assert_eq!(response.token, "jwt_abc");
        assert_eq!(response.has_set_pin, None);
    }

    #[test]
    fn login_response_with_has_set_pin() {
        let value = json!({ "token": "jwt_abc", "hasSetPin": false });

        let response: LoginResponse =
            serde_json::from_value(value).expect("response should deserialize");

        assert_eq!(response.has_set_pin, Some(false));
    }
}
