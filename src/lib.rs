//! # BlockChain DB Client
//!
//! An async client for the BlockChain DB service and its legacy API
//! endpoints: blockchains, currencies, transfers, transactions, blocks,
//! wallets, subscriptions, and the Ethereum wallet-manager shim.
//!
//! Two concerns shape the crate:
//!
//! - **Paginated, ordered fetching**: multi-page collections are assembled by
//!   one future per fetch, one page in flight at a time, appended strictly in
//!   request order. Either the complete result set arrives or the first error
//!   does; there is no partial success.
//! - **Validating decode**: loosely typed JSON becomes immutable domain
//!   records that are fully valid or not produced at all.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use blockdb_client::{BlockDb, ClientConfig, HeightRange};
//!
//! #[tokio::main]
//! async fn main() -> blockdb_client::Result<()> {
//!     let client = BlockDb::new(ClientConfig::default());
//!
//!     let chains = client.get_blockchains(Some(true)).await?;
//!
//!     let transactions = client
//!         .get_transactions(
//!             "bitcoin-mainnet",
//!             &["1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".to_string()],
//!             HeightRange::new(575_020, 600_000),
//!             false,
//!             false,
//!         )
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error taxonomy shared by every query
pub mod error;

/// Common types and type aliases
pub mod types;

/// Request executor trait and the reqwest-backed default
pub mod http;

/// Validating JSON decode layer
pub mod decode;

/// Immutable domain records
pub mod models;

/// Page cursors for multi-page fetches
pub mod pagination;

/// The client surface
pub mod client;

/// Built-in blockchain and currency tables
pub mod catalog;

/// Client configuration
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use catalog::Catalog;
pub use client::{BlockDb, BlockInterests, EthLog, EthToken, EthTransaction};
pub use config::ClientConfig;
pub use error::{QueryError, Result};
pub use models::{
    Block, Blockchain, Currency, CurrencyDenomination, Subscription, SubscriptionEndpoint,
    Transaction, Transfer, Wallet, WalletCurrency,
};
pub use pagination::HeightRange;
pub use types::{BlockHeight, Method};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
