//! Legacy Ethereum wallet-manager endpoints
//!
//! The API services expose two older surfaces alongside the BlockChain DB: a
//! JSON-RPC proxy (`/ethq/{network}/proxy`) and an etherscan-style query
//! endpoint (`/ethq/{network}/query`). Consumers of this shim expect the
//! wire's string-typed fields untouched, so the records here carry strings
//! even for numeric quantities.

use futures::try_join;
use serde_json::json;

use super::BlockDb;
use crate::decode::{expect_many, FromJson, JsonView};
use crate::error::{QueryError, Result};
use crate::pagination::HeightRange;
use crate::types::{JsonValue, Method};

/// The ERC20 Transfer event signature, used to find token activity.
const ERC20_TRANSFER_EVENT: &str = "0xa9059cbb";

/// An Ethereum transaction as the legacy query endpoint reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthTransaction {
    pub hash: String,
    pub source_addr: String,
    pub target_addr: String,
    pub contract_addr: String,
    pub amount: String,
    pub gas_limit: String,
    pub gas_price: String,
    pub data: String,
    pub nonce: String,
    pub gas_used: String,
    pub block_number: String,
    pub block_hash: String,
    pub confirmations: String,
    pub transaction_index: String,
    pub timestamp: String,
    pub is_error: String,
}

impl FromJson for EthTransaction {
    fn from_json(json: &JsonView<'_>) -> Result<Self> {
        Ok(Self {
            hash: json.string("hash").required("hash")?,
            source_addr: json.string("from").required("from")?,
            target_addr: json.string("to").required("to")?,
            contract_addr: json.string("contractAddress").required("contractAddress")?,
            amount: json.string("value").required("value")?,
            gas_limit: json.string("gas").required("gas")?,
            gas_price: json.string("gasPrice").required("gasPrice")?,
            data: json.string("input").required("input")?,
            nonce: json.string("nonce").required("nonce")?,
            gas_used: json.string("gasUsed").required("gasUsed")?,
            block_number: json.string("blockNumber").required("blockNumber")?,
            block_hash: json.string("blockHash").required("blockHash")?,
            confirmations: json.string("confirmations").required("confirmations")?,
            transaction_index: json
                .string("transactionIndex")
                .required("transactionIndex")?,
            timestamp: json.string("timeStamp").required("timeStamp")?,
            is_error: json.string("isError").required("isError")?,
        })
    }
}

/// An Ethereum event log as the legacy query endpoint reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthLog {
    pub hash: String,
    pub contract: String,
    pub topics: Vec<String>,
    pub data: String,
    pub gas_price: String,
    pub gas_used: String,
    pub log_index: String,
    pub block_number: String,
    pub transaction_index: String,
    pub timestamp: String,
}

/// The service always appends an empty-string topic; axe it.
fn drop_last_if_empty(mut topics: Vec<String>) -> Vec<String> {
    if topics.last().is_some_and(|topic| topic.is_empty()) {
        topics.pop();
    }
    topics
}

impl FromJson for EthLog {
    fn from_json(json: &JsonView<'_>) -> Result<Self> {
        Ok(Self {
            hash: json.string("transactionHash").required("transactionHash")?,
            contract: json.string("address").required("address")?,
            topics: drop_last_if_empty(json.string_array("topics").required("topics")?),
            data: json.string("data").required("data")?,
            gas_price: json.string("gasPrice").required("gasPrice")?,
            gas_used: json.string("gasUsed").required("gasUsed")?,
            log_index: json.string("logIndex").required("logIndex")?,
            block_number: json.string("blockNumber").required("blockNumber")?,
            transaction_index: json
                .string("transactionIndex")
                .required("transactionIndex")?,
            timestamp: json.string("timeStamp").required("timeStamp")?,
        })
    }
}

/// An ERC20 token known to the API services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthToken {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub decimals: u32,
}

impl FromJson for EthToken {
    fn from_json(json: &JsonView<'_>) -> Result<Self> {
        let symbol = json.string("code").required("code")?;
        Ok(Self {
            address: json.string("contract_address").required("contract_address")?,
            name: json.string("name").required("name")?,
            description: format!("Token for '{symbol}'"),
            decimals: u32::from(json.uint8("scale").required("scale")?),
            symbol,
        })
    }
}

/// Which kinds of address activity a block-number scan should report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockInterests {
    /// Transactions sent from the address
    pub transactions_as_source: bool,
    /// Transactions sent to the address
    pub transactions_as_target: bool,
    /// Token transfers out of the address (topic position 1)
    pub logs_as_source: bool,
    /// Token transfers into the address (topic position 2)
    pub logs_as_target: bool,
}

/// Block-number strings arrive both `0x`-hex and decimal; unparseable is 0.
fn parse_block_number(s: &str) -> u64 {
    s.strip_prefix("0x")
        .map_or_else(|| s.parse().ok(), |hex| u64::from_str_radix(hex, 16).ok())
        .unwrap_or(0)
}

impl BlockDb {
    /// Ether balance of an address, as a wire string.
    pub async fn get_balance(&self, network: &str, address: &str) -> Result<String> {
        let body = json!({
            "jsonrpc": "2.0",
            "method": "eth_getBalance",
            "params": [address, "latest"],
            "id": 1,
        });
        self.api_proxy(network, &body).await
    }

    /// ERC20 token balance of an address, as a wire string.
    pub async fn get_token_balance(
        &self,
        network: &str,
        address: &str,
        contract: &str,
    ) -> Result<String> {
        let query = [
            ("module", "account".to_string()),
            ("action", "tokenbalance".to_string()),
            ("address", address.to_string()),
            ("contractaddress", contract.to_string()),
        ];
        let body = json!({ "id": 1 });
        let envelope = self.api_query(network, &query, &body).await?;
        let view = JsonView::of(&envelope)
            .ok_or_else(|| QueryError::model("json object expected"))?;
        view.string("result").required("result")
    }

    /// Current gas price, as a wire string.
    pub async fn get_gas_price(&self, network: &str) -> Result<String> {
        let body = json!({
            "method": "eth_gasPrice",
            "params": [],
            "id": 1,
        });
        self.api_proxy(network, &body).await
    }

    /// Gas estimate for a prospective transaction, as a wire string.
    pub async fn get_gas_estimate(
        &self,
        network: &str,
        from: &str,
        to: &str,
        amount: &str,
        data: &str,
    ) -> Result<String> {
        let body = json!({
            "jsonrpc": "2.0",
            "method": "eth_estimateGas",
            "params": [{ "from": from, "to": to, "value": amount, "data": data }],
            "id": 1,
        });
        self.api_proxy(network, &body).await
    }

    /// Submit a signed raw transaction; returns the transaction hash.
    pub async fn submit_transaction(&self, network: &str, transaction: &str) -> Result<String> {
        let body = json!({
            "jsonrpc": "2.0",
            "method": "eth_sendRawTransaction",
            "params": [transaction],
            "id": 1,
        });
        self.api_proxy(network, &body).await
    }

    /// Current chain tip block number, as a wire string.
    pub async fn get_block_number(&self, network: &str) -> Result<String> {
        let body = json!({
            "method": "eth_blockNumber",
            "params": [],
            "id": 1,
        });
        self.api_proxy(network, &body).await
    }

    /// Transaction count of an address, as a wire string.
    pub async fn get_nonce(&self, network: &str, address: &str) -> Result<String> {
        let body = json!({
            "method": "eth_getTransactionCount",
            "params": [address, "latest"],
            "id": 1,
        });
        self.api_proxy(network, &body).await
    }

    /// Transaction history of an address over a block range.
    pub async fn eth_transactions(
        &self,
        network: &str,
        address: &str,
        range: HeightRange,
    ) -> Result<Vec<EthTransaction>> {
        let query = [
            ("module", "account".to_string()),
            ("action", "txlist".to_string()),
            ("address", address.to_string()),
            ("startBlock", range.start.to_string()),
            ("endBlock", range.end.to_string()),
        ];
        let body = json!({ "account": address, "id": 1 });

        let envelope = self.api_query(network, &query, &body).await?;
        expect_many(eth_result_array(&envelope)?)
    }

    /// Event logs matching `event` with `address` in either party topic
    /// position, over a block range. `contract` narrows to one contract.
    pub async fn eth_logs(
        &self,
        network: &str,
        contract: Option<&str>,
        address: &str,
        event: &str,
        range: HeightRange,
    ) -> Result<Vec<EthLog>> {
        let mut query = vec![
            ("module", "logs".to_string()),
            ("action", "getLogs".to_string()),
            ("fromBlock", range.start.to_string()),
            ("toBlock", range.end.to_string()),
            ("topic0", event.to_string()),
            ("topic1", address.to_string()),
            ("topic_1_2_opr", "or".to_string()),
            ("topic2", address.to_string()),
        ];
        if let Some(contract) = contract {
            query.push(("address", contract.to_string()));
        }
        let body = json!({ "id": 1 });

        let envelope = self.api_query(network, &query, &body).await?;
        expect_many(eth_result_array(&envelope)?)
    }

    /// All ERC20 tokens known to the API services.
    pub async fn eth_tokens(&self) -> Result<Vec<EthToken>> {
        let query = [("type", "erc20".to_string())];
        let json = self
            .send(
                Method::GET,
                &self.config.api_base_url,
                "currencies",
                &query,
                None,
            )
            .await?;

        let items = json
            .as_array()
            .ok_or_else(|| QueryError::model("json array expected"))?;
        expect_many(items)
    }

    /// Block numbers over `range` where `address` had activity matching
    /// `interests`. The transaction and log histories are independent
    /// collections; they are fetched concurrently.
    pub async fn get_block_numbers(
        &self,
        network: &str,
        address: &str,
        interests: BlockInterests,
        range: HeightRange,
    ) -> Result<Vec<u64>> {
        let (transactions, logs) = try_join!(
            self.eth_transactions(network, address, range),
            self.eth_logs(network, None, address, ERC20_TRANSFER_EVENT, range),
        )?;

        let mut numbers: Vec<u64> = transactions
            .iter()
            .filter(|tx| {
                (interests.transactions_as_source && tx.source_addr == address)
                    || (interests.transactions_as_target && tx.target_addr == address)
            })
            .map(|tx| parse_block_number(&tx.block_number))
            .collect();

        numbers.extend(
            logs.iter()
                .filter(|log| {
                    log.topics.len() == 3
                        && ((interests.logs_as_source && log.topics[1] == address)
                            || (interests.logs_as_target && log.topics[2] == address))
                })
                .map(|log| parse_block_number(&log.block_number)),
        );

        Ok(numbers)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// POST to the JSON-RPC proxy and extract the string `result`.
    async fn api_proxy(&self, network: &str, body: &JsonValue) -> Result<String> {
        let path = format!("ethq/{}/proxy", network.to_lowercase());
        let json = self
            .send(Method::POST, &self.config.api_base_url, &path, &[], Some(body))
            .await?;
        let view =
            JsonView::of(&json).ok_or_else(|| QueryError::model("json object expected"))?;
        view.string("result").required("result")
    }

    /// POST to the query endpoint, returning the raw envelope.
    async fn api_query(
        &self,
        network: &str,
        query: &[(&str, String)],
        body: &JsonValue,
    ) -> Result<JsonValue> {
        let path = format!("ethq/{}/query", network.to_lowercase());
        self.send(Method::POST, &self.config.api_base_url, &path, query, Some(body))
            .await
    }
}

/// Validate the etherscan-style envelope and yield its `result` array.
fn eth_result_array(envelope: &JsonValue) -> Result<&[JsonValue]> {
    let view =
        JsonView::of(envelope).ok_or_else(|| QueryError::model("json object expected"))?;
    if !view.string("status").is_present() || !view.string("message").is_present() {
        return Err(QueryError::model("missed {status, message, result}"));
    }
    view.array("result")
        .optional()
        .ok_or_else(|| QueryError::model("missed {status, message, result}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_block_number() {
        assert_eq!(parse_block_number("0x10"), 16);
        assert_eq!(parse_block_number("1234"), 1234);
        assert_eq!(parse_block_number("not-a-number"), 0);
        assert_eq!(parse_block_number("0xzz"), 0);
    }

    #[test]
    fn test_drop_last_if_empty() {
        let topics = vec!["0xa".to_string(), "0xb".to_string(), String::new()];
        assert_eq!(drop_last_if_empty(topics), vec!["0xa", "0xb"]);

        let topics = vec!["0xa".to_string()];
        assert_eq!(drop_last_if_empty(topics), vec!["0xa"]);

        assert_eq!(drop_last_if_empty(Vec::new()), Vec::<String>::new());
    }

    #[test]
    fn test_eth_result_array_requires_envelope() {
        let envelope = serde_json::json!({ "status": "1", "result": [] });
        let err = eth_result_array(&envelope).unwrap_err();
        assert!(matches!(err, QueryError::Model(_)));

        let envelope = serde_json::json!({ "status": "1", "message": "OK", "result": [] });
        assert!(eth_result_array(&envelope).unwrap().is_empty());
    }
}
