//! Transfer record

use crate::decode::{FromJson, JsonView};
use crate::error::Result;

/// A single movement of value within a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub id: String,
    pub source: Option<String>,
    pub target: Option<String>,
    /// Amount as a decimal string, in the amount currency's base unit
    pub amount_value: String,
    pub amount_currency: String,
    pub acknowledgements: u64,
    pub index: u64,
    pub transaction_id: Option<String>,
    pub blockchain_id: String,
}

impl FromJson for Transfer {
    fn from_json(json: &JsonView<'_>) -> Result<Self> {
        let amount = json.object("amount").required("amount")?;

        Ok(Self {
            id: json.string("transfer_id").required("transfer_id")?,
            source: json.string("from_address").optional(),
            target: json.string("to_address").optional(),
            amount_value: amount.string("amount").required("amount.amount")?,
            amount_currency: amount.string("currency_id").required("amount.currency_id")?,
            acknowledgements: json
                .uint64("acknowledgements")
                .required("acknowledgements")?,
            index: json.uint64("index").required("index")?,
            transaction_id: json.string("transaction_id").optional(),
            blockchain_id: json.string("blockchain_id").required("blockchain_id")?,
        })
    }
}
