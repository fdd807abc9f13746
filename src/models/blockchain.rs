//! Blockchain record

use crate::decode::{FromJson, JsonView};
use crate::error::Result;
use crate::types::BlockHeight;

/// A blockchain known to the BlockChain DB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blockchain {
    pub id: String,
    pub name: String,
    pub network: String,
    pub is_mainnet: bool,
    /// Native currency id
    pub currency: String,
    /// Reported chain tip, floored to the per-chain known-good minimum
    pub block_height: BlockHeight,
}

/// Known-good minimum heights per chain. The backend's reported tip can lag
/// badly; a consumer must never see a height below these.
const HEIGHT_FLOORS: &[(&str, BlockHeight)] = &[
    ("bitcoin-mainnet", 575_020),
    ("bitcash-mainnet", 1_000_000),
    ("ethereum-mainnet", 8_000_000),
    ("bitcoin-testnet", 900_000),
    ("bitcash-testnet", 1_200_000),
    ("ethereum-testnet", 1_000_000),
    ("ethereum-rinkeby", 2_000_000),
];

/// Minimum known-good height for a chain id; unknown chains floor at zero.
pub(crate) fn height_floor(blockchain_id: &str) -> BlockHeight {
    HEIGHT_FLOORS
        .iter()
        .find(|(id, _)| *id == blockchain_id)
        .map_or(0, |(_, floor)| *floor)
}

impl Blockchain {
    /// Build a blockchain record directly, for catalog tables and test fixtures.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        network: impl Into<String>,
        is_mainnet: bool,
        currency: impl Into<String>,
        block_height: BlockHeight,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            network: network.into(),
            is_mainnet,
            currency: currency.into(),
            block_height,
        }
    }
}

impl FromJson for Blockchain {
    fn from_json(json: &JsonView<'_>) -> Result<Self> {
        let id = json.string("id").required("id")?;
        let block_height = json
            .uint64("block_height")
            .required("block_height")?
            .max(height_floor(&id));

        Ok(Self {
            name: json.string("name").required("name")?,
            network: json.string("network").required("network")?,
            is_mainnet: json.boolean("is_mainnet").required("is_mainnet")?,
            currency: json
                .string("native_currency_id")
                .required("native_currency_id")?,
            block_height,
            id,
        })
    }
}
