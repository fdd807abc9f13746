//! Block record

use chrono::{DateTime, Utc};

use super::Transaction;
use crate::decode::{expect_many, Field, FromJson, JsonView};
use crate::error::{QueryError, Result};
use crate::types::BlockHeight;

/// A block, optionally carrying its transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: String,
    pub blockchain_id: String,
    pub hash: String,
    pub height: BlockHeight,
    pub header: Option<String>,
    pub raw: Option<Vec<u8>>,
    pub mined: DateTime<Utc>,
    pub size: u64,
    pub prev_hash: Option<String>,
    pub next_hash: Option<String>,
    /// `None` when the backend omitted transactions entirely; `Some(vec![])`
    /// when it reported an empty list. The two are not collapsed.
    pub transactions: Option<Vec<Transaction>>,
    pub acknowledgements: u64,
}

impl FromJson for Block {
    fn from_json(json: &JsonView<'_>) -> Result<Self> {
        // Optional key, but once present every transaction must decode.
        let transactions = match json.array("transactions") {
            Field::Absent => None,
            Field::Invalid => return Err(QueryError::model("ill-typed field 'transactions'")),
            Field::Present(items) => Some(expect_many(items)?),
        };

        Ok(Self {
            id: json.string("block_id").required("block_id")?,
            blockchain_id: json.string("blockchain_id").required("blockchain_id")?,
            hash: json.string("hash").required("hash")?,
            height: json.uint64("height").required("height")?,
            header: json.string("header").optional(),
            raw: json.bytes("raw").optional(),
            mined: json.date("mined").required("mined")?,
            size: json.uint64("size").required("size")?,
            prev_hash: json.string("prev_hash").optional(),
            next_hash: json.string("next_hash").optional(),
            transactions,
            acknowledgements: json
                .uint64("acknowledgements")
                .required("acknowledgements")?,
        })
    }
}
