//! Wallet records

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::decode::{expect_many, Field, FromJson, JsonView};
use crate::error::{QueryError, Result};
use crate::types::JsonValue;

/// One currency tracked by a wallet, with its addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletCurrency {
    pub currency: String,
    pub addresses: Vec<String>,
}

impl WalletCurrency {
    /// Build a wallet currency entry
    pub fn new(currency: impl Into<String>, addresses: Vec<String>) -> Self {
        Self {
            currency: currency.into(),
            addresses,
        }
    }

    /// Encode for wallet creation requests
    pub fn to_json(&self) -> JsonValue {
        json!({
            "currency_id": self.currency,
            "addresses": self.addresses,
        })
    }
}

impl FromJson for WalletCurrency {
    fn from_json(json: &JsonView<'_>) -> Result<Self> {
        Ok(Self {
            currency: json.string("currency_id").required("currency_id")?,
            addresses: json.string_array("addresses").optional().unwrap_or_default(),
        })
    }
}

/// A wallet registered with the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    pub id: String,
    pub created: DateTime<Utc>,
    pub currencies: Vec<WalletCurrency>,
}

impl FromJson for Wallet {
    fn from_json(json: &JsonView<'_>) -> Result<Self> {
        // A wallet with no currencies key reads as empty; a present list
        // decodes all-or-nothing.
        let currencies = match json.array("currencies") {
            Field::Absent => Vec::new(),
            Field::Invalid => return Err(QueryError::model("ill-typed field 'currencies'")),
            Field::Present(items) => expect_many(items)?,
        };

        Ok(Self {
            id: json.string("wallet_id").required("wallet_id")?,
            created: json.date("created").required("created")?,
            currencies,
        })
    }
}
