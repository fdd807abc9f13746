//! Transaction record

use chrono::{DateTime, Utc};

use super::Transfer;
use crate::decode::{expect_many, FromJson, JsonView};
use crate::error::Result;
use crate::types::BlockHeight;

/// A transaction, with its embedded transfers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    pub blockchain_id: String,
    pub hash: String,
    pub identifier: String,
    pub block_hash: Option<String>,
    pub block_height: Option<BlockHeight>,
    pub index: Option<u64>,
    pub confirmations: Option<u64>,
    pub status: String,
    pub size: u64,
    pub timestamp: Option<DateTime<Utc>>,
    pub first_seen: DateTime<Utc>,
    /// Raw transaction bytes, when requested with include_raw
    pub raw: Option<Vec<u8>>,
    pub transfers: Vec<Transfer>,
    pub acknowledgements: u64,
}

impl FromJson for Transaction {
    fn from_json(json: &JsonView<'_>) -> Result<Self> {
        // Transfers are required and decode all-or-nothing: one bad transfer
        // fails the transaction.
        let items = json.array("transfers").required("transfers")?;
        let transfers = expect_many(items)?;

        Ok(Self {
            id: json.string("transaction_id").required("transaction_id")?,
            blockchain_id: json.string("blockchain_id").required("blockchain_id")?,
            hash: json.string("hash").required("hash")?,
            identifier: json.string("identifier").required("identifier")?,
            block_hash: json.string("block_hash").optional(),
            block_height: json.uint64("block_height").optional(),
            index: json.uint64("index").optional(),
            confirmations: json.uint64("confirmations").optional(),
            status: json.string("status").required("status")?,
            size: json.uint64("size").required("size")?,
            timestamp: json.date("timestamp").optional(),
            first_seen: json.date("first_seen").required("first_seen")?,
            raw: json.bytes("raw").optional(),
            transfers,
            acknowledgements: json
                .uint64("acknowledgements")
                .required("acknowledgements")?,
        })
    }
}
