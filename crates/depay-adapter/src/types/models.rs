/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::Direction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDetails {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub balance: Decimal,
    #[serde(rename = "accountNumber")]
    pub account_number: String,
    pub email: String,
}

/// One side of a transaction, as the history endpoint resolves it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counterparty {
    pub account: String,
    pub name: String,
}

/// Server-sourced transaction history entry, never created client-side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub note: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub direction: Direction,
    pub timestamp: String,
    pub sender: Counterparty,
    pub receiver: Counterparty,
}

impl TransactionRecord {
    /// Display name of the party on the other side of this transaction
    pub fn counterparty(&self) -> &str {
        match self.direction {
            Direction::Received => &self.sender.name,
            Direction::Send => &self.receiver.name,
        }
    }
}
