//! The BlockChain DB client surface
//!
//! One [`BlockDb`] value serves every endpoint. Collection endpoints that the
//! backend pages are assembled by the cursors in [`crate::pagination`]: each
//! fetch is a single future, one page request in flight at a time, pages
//! processed strictly in issue order. A fetch either yields the complete
//! result set or the first error; records from earlier pages are never
//! surfaced alongside a later failure.

mod eth;

pub use eth::{BlockInterests, EthLog, EthToken, EthTransaction};

use std::sync::Arc;

use serde_json::json;
use tracing::debug;
use url::Url;

use crate::catalog::Catalog;
use crate::config::ClientConfig;
use crate::decode::{expect_many, expect_one, FromJson, JsonView};
use crate::error::{QueryError, Result};
use crate::http::{ExecutorConfig, HttpExecutor, RequestExecutor};
use crate::models::{
    Block, Blockchain, Currency, Subscription, SubscriptionEndpoint, Transaction, Transfer,
    Wallet, WalletCurrency,
};
use crate::pagination::{FixedStepCursor, HeightRange, PageOutcome, SignalCursor};
use crate::types::{JsonValue, Method};

/// Client for the BlockChain DB and the legacy API services.
#[derive(Clone)]
pub struct BlockDb {
    executor: Arc<dyn RequestExecutor>,
    config: ClientConfig,
}

/// One page of a collection response: the embedded records plus the
/// backend's continuation signal.
struct PageEnvelope {
    records: Vec<JsonValue>,
    more: bool,
}

impl BlockDb {
    /// Create a client backed by the default HTTP executor.
    pub fn new(config: ClientConfig) -> Self {
        let executor = HttpExecutor::with_config(ExecutorConfig {
            timeout: config.timeout,
            user_agent: config.user_agent.clone(),
            ..ExecutorConfig::default()
        });
        Self {
            executor: Arc::new(executor),
            config,
        }
    }

    /// Create a client over a caller-supplied executor.
    pub fn with_executor(config: ClientConfig, executor: Arc<dyn RequestExecutor>) -> Self {
        Self { executor, config }
    }

    /// The built-in catalog configured for this client
    pub fn catalog(&self) -> &Catalog {
        &self.config.catalog
    }

    // ------------------------------------------------------------------
    // Blockchains
    // ------------------------------------------------------------------

    /// Fetch all known blockchains, optionally restricted to mainnet or
    /// testnet chains.
    pub async fn get_blockchains(&self, mainnet: Option<bool>) -> Result<Vec<Blockchain>> {
        let query = match mainnet {
            Some(mainnet) => vec![("testnet", (!mainnet).to_string())],
            None => Vec::new(),
        };
        let page = self.bdb_collection("blockchains", &query).await?;
        expect_many(&page.records)
    }

    /// Fetch one blockchain by id.
    pub async fn get_blockchain(&self, blockchain_id: &str) -> Result<Blockchain> {
        let path = format!("blockchains/{blockchain_id}");
        let json = self.bdb_entity(&path, &[]).await?;
        expect_one(blockchain_id, std::slice::from_ref(&json))
    }

    // ------------------------------------------------------------------
    // Currencies
    // ------------------------------------------------------------------

    /// Fetch all currencies, optionally restricted to one blockchain.
    pub async fn get_currencies(&self, blockchain_id: Option<&str>) -> Result<Vec<Currency>> {
        let query = match blockchain_id {
            Some(id) => vec![("blockchain_id", id.to_string())],
            None => Vec::new(),
        };
        let page = self.bdb_collection("currencies", &query).await?;
        expect_many(&page.records)
    }

    /// Fetch one currency by id.
    pub async fn get_currency(&self, currency_id: &str) -> Result<Currency> {
        let path = format!("currencies/{currency_id}");
        let json = self.bdb_entity(&path, &[]).await?;
        expect_one(currency_id, std::slice::from_ref(&json))
    }

    // ------------------------------------------------------------------
    // Subscriptions
    // ------------------------------------------------------------------

    /// Fetch one subscription by id.
    pub async fn get_subscription(&self, subscription_id: &str) -> Result<Subscription> {
        let path = format!("subscriptions/{subscription_id}");
        let json = self.bdb_entity(&path, &[]).await?;
        expect_one(subscription_id, std::slice::from_ref(&json))
    }

    /// Register a subscription; returns the backend-assigned subscription id.
    pub async fn create_subscription(
        &self,
        wallet_id: &str,
        device_id: &str,
        endpoint: &SubscriptionEndpoint,
    ) -> Result<String> {
        let body = json!({
            "wallet_id": wallet_id,
            "device_id": device_id,
            "endpoint": endpoint.to_json(),
        });

        let json = self
            .send(
                Method::POST,
                &self.config.bdb_base_url,
                "subscriptions",
                &[],
                Some(&body),
            )
            .await?;

        JsonView::of(&json)
            .and_then(|view| view.string("subscription_id").optional())
            .ok_or_else(|| QueryError::model("subscription"))
    }

    // ------------------------------------------------------------------
    // Transfers
    // ------------------------------------------------------------------

    /// Fetch all transfers touching any of `addresses` on a blockchain.
    pub async fn get_transfers(
        &self,
        blockchain_id: &str,
        addresses: &[String],
    ) -> Result<Vec<Transfer>> {
        let mut query = vec![("blockchain_id", blockchain_id.to_string())];
        for address in addresses {
            query.push(("address", address.clone()));
        }
        let page = self.bdb_collection("transfers", &query).await?;
        expect_many(&page.records)
    }

    /// Fetch one transfer by id.
    pub async fn get_transfer(&self, transfer_id: &str) -> Result<Transfer> {
        let path = format!("transfers/{transfer_id}");
        let json = self.bdb_entity(&path, &[]).await?;
        expect_one(transfer_id, std::slice::from_ref(&json))
    }

    // ------------------------------------------------------------------
    // Wallets
    // ------------------------------------------------------------------

    /// Fetch one wallet by id.
    pub async fn get_wallet(&self, wallet_id: &str) -> Result<Wallet> {
        let path = format!("wallets/{wallet_id}");
        let json = self.bdb_entity(&path, &[]).await?;
        expect_one(wallet_id, std::slice::from_ref(&json))
    }

    /// Register a wallet with its currencies and addresses.
    pub async fn create_wallet(&self, id: &str, currencies: &[WalletCurrency]) -> Result<()> {
        let body = json!({
            "wallet_id": id,
            "currencies": currencies.iter().map(WalletCurrency::to_json).collect::<Vec<_>>(),
        });

        self.send(
            Method::POST,
            &self.config.bdb_base_url,
            "wallets",
            &[],
            Some(&body),
        )
        .await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Transactions
    // ------------------------------------------------------------------

    /// Fetch all transactions for `addresses` on a blockchain over a height
    /// range. The range is partitioned into fixed-size chunks, one page per
    /// chunk, appended in request order; the first page error aborts the
    /// whole fetch with nothing returned.
    pub async fn get_transactions(
        &self,
        blockchain_id: &str,
        addresses: &[String],
        range: HeightRange,
        include_raw: bool,
        include_proof: bool,
    ) -> Result<Vec<Transaction>> {
        let mut cursor = FixedStepCursor::new(range, self.config.page_step);
        let mut results: Vec<Transaction> = Vec::new();

        while let Some(chunk) = cursor.next_range() {
            let mut query = vec![
                ("blockchain_id", blockchain_id.to_string()),
                ("start_height", chunk.start.to_string()),
                ("end_height", chunk.end.to_string()),
                ("include_proof", include_proof.to_string()),
                ("include_raw", include_raw.to_string()),
            ];
            for address in addresses {
                query.push(("address", address.clone()));
            }

            let page = self.bdb_collection("transactions", &query).await?;
            results.extend(expect_many::<Transaction>(&page.records)?);
            debug!(
                blockchain_id,
                page = cursor.pages_issued(),
                records = results.len(),
                "transactions page fetched"
            );
        }

        Ok(results)
    }

    /// Fetch one transaction by id.
    pub async fn get_transaction(
        &self,
        transaction_id: &str,
        include_raw: bool,
        include_proof: bool,
    ) -> Result<Transaction> {
        let path = format!("transactions/{transaction_id}");
        let query = [
            ("include_proof", include_proof.to_string()),
            ("include_raw", include_raw.to_string()),
        ];
        let json = self.bdb_entity(&path, &query).await?;
        expect_one(transaction_id, std::slice::from_ref(&json))
    }

    /// Submit signed transaction bytes; returns the accepted transaction.
    pub async fn put_transaction(
        &self,
        blockchain_id: &str,
        transaction: &[u8],
    ) -> Result<Transaction> {
        use base64::Engine;

        let body = json!({
            "transaction": base64::engine::general_purpose::STANDARD.encode(transaction),
        });
        let query = [("blockchain_id", blockchain_id.to_string())];

        let json = self
            .send(
                Method::PUT,
                &self.config.bdb_base_url,
                "transactions",
                &query,
                Some(&body),
            )
            .await?;

        let view =
            JsonView::of(&json).ok_or_else(|| QueryError::model("json object expected"))?;
        Transaction::from_json(&view)
    }

    // ------------------------------------------------------------------
    // Blocks
    // ------------------------------------------------------------------

    /// Fetch all blocks on a blockchain over a height range. Continuation is
    /// backend-signaled: pages repeat while the response reports more data,
    /// each restarting one past the highest block seen so far. The cursor
    /// never moves backwards.
    #[allow(clippy::fn_params_excessive_bools)]
    pub async fn get_blocks(
        &self,
        blockchain_id: &str,
        range: HeightRange,
        include_raw: bool,
        include_tx: bool,
        include_tx_raw: bool,
        include_tx_proof: bool,
    ) -> Result<Vec<Block>> {
        let mut cursor = SignalCursor::new(range);
        let mut results: Vec<Block> = Vec::new();

        while let Some(window) = cursor.current() {
            let mut query = vec![
                ("blockchain_id", blockchain_id.to_string()),
                ("start_height", window.start.to_string()),
            ];
            if !window.is_unbounded() {
                query.push(("end_height", window.end.to_string()));
            }
            query.extend([
                ("include_raw", include_raw.to_string()),
                ("include_tx", include_tx.to_string()),
                ("include_tx_raw", include_tx_raw.to_string()),
                ("include_tx_proof", include_tx_proof.to_string()),
            ]);

            let page = self.bdb_collection("blocks", &query).await?;
            results.extend(expect_many::<Block>(&page.records)?);

            let max_height = results.iter().map(|block| block.height).max();
            let outcome = if page.more {
                PageOutcome::more(max_height)
            } else {
                PageOutcome::done(max_height)
            };
            cursor.advance(outcome);
            debug!(
                blockchain_id,
                page = cursor.pages_issued(),
                records = results.len(),
                more = page.more,
                "blocks page fetched"
            );
        }

        Ok(results)
    }

    /// Fetch one block by id.
    #[allow(clippy::fn_params_excessive_bools)]
    pub async fn get_block(
        &self,
        block_id: &str,
        include_raw: bool,
        include_tx: bool,
        include_tx_raw: bool,
        include_tx_proof: bool,
    ) -> Result<Block> {
        let path = format!("blocks/{block_id}");
        let query = [
            ("include_raw", include_raw.to_string()),
            ("include_tx", include_tx.to_string()),
            ("include_tx_raw", include_tx_raw.to_string()),
            ("include_tx_proof", include_tx_proof.to_string()),
        ];
        let json = self.bdb_entity(&path, &query).await?;
        expect_one(block_id, std::slice::from_ref(&json))
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn build_url(&self, base: &str, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(base).map_err(|err| QueryError::url_build(err.to_string()))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| QueryError::url_build("base url cannot carry segments"))?;
            segments.pop_if_empty();
            for segment in path.trim_start_matches('/').split('/') {
                segments.push(segment);
            }
        }
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    /// One round trip: 200 with a JSON body, or a `QueryError`. A non-200
    /// status fails before any body parsing.
    pub(crate) async fn send(
        &self,
        method: Method,
        base: &str,
        path: &str,
        query: &[(&str, String)],
        body: Option<&JsonValue>,
    ) -> Result<JsonValue> {
        let url = self.build_url(base, path, query)?;
        let headers: Vec<(String, String)> = self
            .config
            .default_headers
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        let response = self.executor.execute(method, url, &headers, body).await?;

        if response.status != 200 {
            return Err(QueryError::status(response.status));
        }
        if response.body.is_empty() {
            return Err(QueryError::NoData);
        }

        let json: JsonValue = serde_json::from_slice(&response.body)?;
        Ok(json)
    }

    /// GET one page of an embedded collection. The records live under
    /// `_embedded` keyed by the endpoint path; the continuation signal is
    /// `page.total_pages > 1`.
    async fn bdb_collection(&self, path: &str, query: &[(&str, String)]) -> Result<PageEnvelope> {
        let json = self
            .send(Method::GET, &self.config.bdb_base_url, path, query, None)
            .await?;
        let view =
            JsonView::of(&json).ok_or_else(|| QueryError::model("json object expected"))?;

        let more = view.object("page").optional().is_some_and(|page| {
            page.uint64("total_pages").optional().unwrap_or(0) > 1
        });

        let records = view
            .object("_embedded")
            .optional()
            .and_then(|embedded| embedded.array(path).optional())
            .ok_or_else(|| QueryError::model("array of json objects expected"))?;

        Ok(PageEnvelope {
            records: records.to_vec(),
            more,
        })
    }

    /// GET one entity as a bare JSON object; never signals continuation.
    async fn bdb_entity(&self, path: &str, query: &[(&str, String)]) -> Result<JsonValue> {
        self.send(Method::GET, &self.config.bdb_base_url, path, query, None)
            .await
    }
}

impl std::fmt::Debug for BlockDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockDb")
            .field("bdb_base_url", &self.config.bdb_base_url)
            .field("api_base_url", &self.config.api_base_url)
            .finish_non_exhaustive()
    }
}
