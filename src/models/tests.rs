//! Tests for domain record decoding

use super::*;
use crate::decode::{expect_many, FromJson, JsonView};
use crate::error::QueryError;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn decode<T: FromJson>(value: &Value) -> crate::error::Result<T> {
    T::from_json(&JsonView::of(value).expect("object"))
}

fn transfer_json(id: &str) -> Value {
    json!({
        "transfer_id": id,
        "blockchain_id": "bitcoin-mainnet",
        "acknowledgements": 6,
        "index": 0,
        "amount": { "amount": "1000", "currency_id": "btc" },
        "from_address": "1from",
        "to_address": "1to",
        "transaction_id": "tx-1",
    })
}

fn transaction_json(id: &str, height: u64) -> Value {
    json!({
        "transaction_id": id,
        "blockchain_id": "bitcoin-mainnet",
        "hash": "00ff",
        "identifier": id,
        "block_height": height,
        "status": "confirmed",
        "size": 250,
        "first_seen": "2019-04-01T12:30:00.000+0000",
        "acknowledgements": 1,
        "transfers": [transfer_json("xfer-1")],
    })
}

#[test]
fn test_blockchain_decode() {
    let chain: Blockchain = decode(&json!({
        "id": "ethereum-mainnet",
        "name": "Ethereum",
        "network": "mainnet",
        "is_mainnet": true,
        "native_currency_id": "eth",
        "block_height": 9_000_000u64,
    }))
    .unwrap();

    assert_eq!(chain.id, "ethereum-mainnet");
    assert_eq!(chain.currency, "eth");
    assert_eq!(chain.block_height, 9_000_000);
}

#[test]
fn test_blockchain_height_floored() {
    // stale backend tip never surfaces below the per-chain floor
    let chain: Blockchain = decode(&json!({
        "id": "bitcoin-mainnet",
        "name": "Bitcoin",
        "network": "mainnet",
        "is_mainnet": true,
        "native_currency_id": "btc",
        "block_height": 12u64,
    }))
    .unwrap();

    assert_eq!(chain.block_height, 575_020);
}

#[test]
fn test_blockchain_missing_required_field() {
    let result: crate::error::Result<Blockchain> = decode(&json!({
        "id": "bitcoin-mainnet",
        "name": "Bitcoin",
    }));
    assert!(matches!(result, Err(QueryError::Model(_))));
}

#[test]
fn test_currency_decode_with_denominations() {
    let currency: Currency = decode(&json!({
        "name": "Bitcoin",
        "code": "btc",
        "type": "native",
        "blockchain_id": "bitcoin-mainnet",
        "denominations": [
            { "name": "satoshi", "short_name": "sat", "decimals": 0 },
            { "name": "bitcoin", "short_name": "btc", "decimals": 8 },
        ],
    }))
    .unwrap();

    assert_eq!(currency.id, "Bitcoin");
    assert_eq!(currency.address, None);
    assert_eq!(currency.denominations.len(), 2);
    assert_eq!(currency.denominations[1].symbol, "₿");
    assert_eq!(currency.denominations[0].symbol, "sat");
}

#[test]
fn test_currency_denomination_all_or_nothing() {
    // one denomination missing decimals fails the whole currency
    let result: crate::error::Result<Currency> = decode(&json!({
        "name": "Bitcoin",
        "code": "btc",
        "type": "native",
        "blockchain_id": "bitcoin-mainnet",
        "denominations": [
            { "name": "satoshi", "short_name": "sat", "decimals": 0 },
            { "name": "bitcoin", "short_name": "btc" },
        ],
    }));
    assert!(matches!(result, Err(QueryError::Model(_))));
}

#[test]
fn test_transfer_decode() {
    let transfer: Transfer = decode(&transfer_json("xfer-9")).unwrap();
    assert_eq!(transfer.id, "xfer-9");
    assert_eq!(transfer.amount_value, "1000");
    assert_eq!(transfer.amount_currency, "btc");
    assert_eq!(transfer.source.as_deref(), Some("1from"));
}

#[test]
fn test_transfer_requires_amount_object() {
    let mut value = transfer_json("xfer-9");
    value.as_object_mut().unwrap().remove("amount");
    let result: crate::error::Result<Transfer> = decode(&value);
    assert!(matches!(result, Err(QueryError::Model(_))));
}

#[test]
fn test_transaction_decode() {
    let tx: Transaction = decode(&transaction_json("tx-1", 500)).unwrap();
    assert_eq!(tx.id, "tx-1");
    assert_eq!(tx.block_height, Some(500));
    assert_eq!(tx.transfers.len(), 1);
    assert_eq!(tx.raw, None);
    assert_eq!(tx.timestamp, None);
}

#[test]
fn test_transaction_nested_transfer_failure_fails_record() {
    let mut value = transaction_json("tx-1", 500);
    value["transfers"] = json!([{ "transfer_id": "broken" }]);
    let result: crate::error::Result<Transaction> = decode(&value);
    assert!(matches!(result, Err(QueryError::Model(_))));
}

#[test]
fn test_transaction_raw_bytes() {
    let mut value = transaction_json("tx-1", 500);
    value["raw"] = json!("AQID");
    let tx: Transaction = decode(&value).unwrap();
    assert_eq!(tx.raw, Some(vec![1, 2, 3]));
}

fn block_json() -> Value {
    json!({
        "block_id": "blk-1",
        "blockchain_id": "bitcoin-mainnet",
        "hash": "beef",
        "height": 700u64,
        "mined": "2019-04-01T12:30:00.000+0000",
        "size": 1_024,
        "acknowledgements": 3,
    })
}

#[test]
fn test_block_transactions_absent_vs_empty() {
    // absent key and empty list are distinguishable states
    let without: Block = decode(&block_json()).unwrap();
    assert_eq!(without.transactions, None);

    let mut value = block_json();
    value["transactions"] = json!([]);
    let with_empty: Block = decode(&value).unwrap();
    assert_eq!(with_empty.transactions, Some(vec![]));
}

#[test]
fn test_block_nested_transaction_failure_fails_record() {
    let mut value = block_json();
    value["transactions"] = json!([{ "transaction_id": "broken" }]);
    let result: crate::error::Result<Block> = decode(&value);
    assert!(matches!(result, Err(QueryError::Model(_))));
}

#[test]
fn test_wallet_decode_and_currency_roundtrip() {
    let wallet: Wallet = decode(&json!({
        "wallet_id": "w-1",
        "created": "2019-04-01T12:30:00.000+0000",
        "currencies": [
            { "currency_id": "btc", "addresses": ["1abc", "1def"] },
            { "currency_id": "eth" },
        ],
    }))
    .unwrap();

    assert_eq!(wallet.id, "w-1");
    assert_eq!(wallet.currencies.len(), 2);
    assert_eq!(wallet.currencies[0].addresses.len(), 2);
    assert_eq!(wallet.currencies[1].addresses.len(), 0);

    let encoded = wallet.currencies[0].to_json();
    assert_eq!(encoded["currency_id"], "btc");
    assert_eq!(encoded["addresses"][1], "1def");
}

#[test]
fn test_wallet_without_currencies_is_empty() {
    let wallet: Wallet = decode(&json!({
        "wallet_id": "w-2",
        "created": "2019-04-01T12:30:00.000+0000",
    }))
    .unwrap();
    assert!(wallet.currencies.is_empty());
}

#[test]
fn test_subscription_decode() {
    let sub: Subscription = decode(&json!({
        "subscription_id": "s-1",
        "wallet_id": "w-1",
        "device_id": "d-1",
        "endpoint": { "environment": "develop", "kind": "apns", "value": "token" },
    }))
    .unwrap();

    assert_eq!(sub.id, "s-1");
    assert_eq!(sub.endpoint.kind, "apns");
}

#[test]
fn test_subscription_requires_endpoint() {
    let result: crate::error::Result<Subscription> = decode(&json!({
        "subscription_id": "s-1",
        "wallet_id": "w-1",
        "device_id": "d-1",
    }));
    assert!(matches!(result, Err(QueryError::Model(_))));
}

#[test]
fn test_expect_many_transactions_in_order() {
    let data = vec![transaction_json("tx-a", 1), transaction_json("tx-b", 2)];
    let txs: Vec<Transaction> = expect_many(&data).unwrap();
    assert_eq!(txs[0].id, "tx-a");
    assert_eq!(txs[1].id, "tx-b");
}
