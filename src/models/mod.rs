//! Domain records decoded from BlockChain DB responses
//!
//! Each record is an immutable flat value decoded from one JSON object.
//! Nested records (a Block's Transactions, a Transaction's Transfers)
//! decode recursively; any single nested failure fails the containing
//! record.

mod block;
mod blockchain;
mod currency;
mod subscription;
mod transaction;
mod transfer;
mod wallet;

pub use block::Block;
pub use blockchain::Blockchain;
pub use currency::{Currency, CurrencyDenomination};
pub use subscription::{Subscription, SubscriptionEndpoint};
pub use transaction::Transaction;
pub use transfer::Transfer;
pub use wallet::{Wallet, WalletCurrency};

#[cfg(test)]
mod tests;
