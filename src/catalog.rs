//! Built-in blockchain and currency definitions
//!
//! Fallback tables used when the backend cannot be reached or returns nothing
//! useful. Block heights here are stale the moment they are written; treat
//! them as lower bounds only.

use crate::models::{Blockchain, Currency, CurrencyDenomination};

const ADDRESS_BRD_MAINNET: &str = "0x558ec3152e2eb2174905cd19aea4e34a23de9ad6";
const ADDRESS_BRD_TESTNET: &str = "0x7108ca7c4718efa810457f228305c9c71390931a";
const ADDRESS_EOS_MAINNET: &str = "0x86fa049857e0209aa7d9e616f7eb3b3b78ecfdb0";

/// Built-in blockchain and currency tables
#[derive(Debug, Clone)]
pub struct Catalog {
    pub blockchains: Vec<Blockchain>,
    pub currencies: Vec<Currency>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Catalog {
    /// An empty catalog
    pub fn empty() -> Self {
        Self {
            blockchains: Vec::new(),
            currencies: Vec::new(),
        }
    }

    /// The built-in catalog of known chains and their currencies
    pub fn defaults() -> Self {
        Self {
            blockchains: default_blockchains(),
            currencies: default_currencies(),
        }
    }

    /// Look up a blockchain by id
    pub fn blockchain(&self, id: &str) -> Option<&Blockchain> {
        self.blockchains.iter().find(|b| b.id == id)
    }

    /// Look up a currency by id
    pub fn currency(&self, id: &str) -> Option<&Currency> {
        self.currencies.iter().find(|c| c.id == id)
    }

    /// All currencies hosted on a blockchain
    pub fn currencies_for(&self, blockchain_id: &str) -> Vec<&Currency> {
        self.currencies
            .iter()
            .filter(|c| c.blockchain_id == blockchain_id)
            .collect()
    }
}

fn default_blockchains() -> Vec<Blockchain> {
    vec![
        // Mainnet
        Blockchain::new("bitcash-mainnet", "Bitcash", "mainnet", true, "bch", 1_000_000),
        Blockchain::new("ethereum-mainnet", "Ethereum", "mainnet", true, "eth", 8_000_000),
        // Testnet
        Blockchain::new("bitcoin-testnet", "Bitcoin", "testnet", false, "btc", 900_000),
        Blockchain::new("bitcash-testnet", "Bitcash", "testnet", false, "bch", 1_200_000),
        Blockchain::new("ethereum-testnet", "Ethereum", "testnet", false, "eth", 1_000_000),
        Blockchain::new("ethereum-rinkeby", "Ethereum", "rinkeby", false, "eth", 2_000_000),
    ]
}

fn default_currencies() -> Vec<Currency> {
    vec![
        // Mainnet
        Currency::with_denominations(
            "Bitcoin",
            "Bitcoin",
            "btc",
            "native",
            "bitcoin-mainnet",
            None,
            vec![
                CurrencyDenomination::new("satoshi", "sat", 0),
                CurrencyDenomination::new("bitcoin", "btc", 8),
            ],
        ),
        Currency::with_denominations(
            "Bitcash",
            "Bitcash",
            "bch",
            "native",
            "bitcash-mainnet",
            None,
            vec![
                CurrencyDenomination::new("satoshi", "sat", 0),
                CurrencyDenomination::new("bitcoin", "bch", 8),
            ],
        ),
        Currency::with_denominations(
            "Ethereum",
            "Ethereum",
            "eth",
            "native",
            "ethereum-mainnet",
            None,
            vec![
                CurrencyDenomination::new("wei", "wei", 0),
                CurrencyDenomination::new("gwei", "gwei", 9),
                CurrencyDenomination::new("ether", "eth", 18),
            ],
        ),
        Currency::with_denominations(
            "BRD Token",
            "BRD Token",
            "BRD",
            "erc20",
            "ethereum-mainnet",
            Some(ADDRESS_BRD_MAINNET),
            vec![
                CurrencyDenomination::new("BRD_INTEGER", "BRDI", 0),
                CurrencyDenomination::new("BRD", "BRD", 18),
            ],
        ),
        Currency::with_denominations(
            "EOS Token",
            "EOS Token",
            "EOS",
            "erc20",
            "ethereum-mainnet",
            Some(ADDRESS_EOS_MAINNET),
            vec![
                CurrencyDenomination::new("EOS_INTEGER", "EOSI", 0),
                CurrencyDenomination::new("EOS", "EOS", 18),
            ],
        ),
        // Testnet
        Currency::with_denominations(
            "Bitcoin-Testnet",
            "Bitcoin",
            "btc",
            "native",
            "bitcoin-testnet",
            None,
            vec![
                CurrencyDenomination::new("satoshi", "sat", 0),
                CurrencyDenomination::new("bitcoin", "btc", 8),
            ],
        ),
        Currency::with_denominations(
            "Bitcash-Testnet",
            "Bitcash",
            "bch",
            "native",
            "bitcash-testnet",
            None,
            vec![
                CurrencyDenomination::new("satoshi", "sat", 0),
                CurrencyDenomination::new("bitcoin", "bch", 8),
            ],
        ),
        Currency::with_denominations(
            "Ethereum-Testnet",
            "Ethereum",
            "eth",
            "native",
            "ethereum-testnet",
            None,
            vec![
                CurrencyDenomination::new("wei", "wei", 0),
                CurrencyDenomination::new("gwei", "gwei", 9),
                CurrencyDenomination::new("ether", "eth", 18),
            ],
        ),
        Currency::with_denominations(
            "BRD Token Testnet",
            "BRD Token",
            "BRD",
            "erc20",
            "ethereum-testnet",
            Some(ADDRESS_BRD_TESTNET),
            vec![
                CurrencyDenomination::new("BRD_INTEGER", "BRDI", 0),
                CurrencyDenomination::new("BRD", "BRD", 18),
            ],
        ),
    ]
}
