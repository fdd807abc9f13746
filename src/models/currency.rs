//! Currency and denomination records

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::decode::{FromJson, JsonView};
use crate::error::Result;

/// One unit of account for a currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyDenomination {
    pub name: String,
    pub code: String,
    pub decimals: u8,
    pub symbol: String,
}

static CURRENCY_SYMBOLS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("btc", "₿"), ("eth", "Ξ")]));

/// Display symbol for a currency code; the code itself when none is known.
pub fn lookup_symbol(code: &str) -> String {
    CURRENCY_SYMBOLS
        .get(code)
        .map_or_else(|| code.to_string(), ToString::to_string)
}

impl FromJson for CurrencyDenomination {
    fn from_json(json: &JsonView<'_>) -> Result<Self> {
        let code = json.string("short_name").required("short_name")?;
        Ok(Self {
            name: json.string("name").required("name")?,
            decimals: json.uint8("decimals").required("decimals")?,
            symbol: lookup_symbol(&code),
            code,
        })
    }
}

/// A currency hosted on a blockchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    /// Consumers key currencies by display name, not the wire id
    pub id: String,
    pub name: String,
    pub code: String,
    /// "native" or "erc20"
    pub currency_type: String,
    pub blockchain_id: String,
    /// Contract address, for token currencies
    pub address: Option<String>,
    pub denominations: Vec<CurrencyDenomination>,
}

impl FromJson for Currency {
    fn from_json(json: &JsonView<'_>) -> Result<Self> {
        let name = json.string("name").required("name")?;

        // All denominations must decode; one bad entry fails the currency.
        let items = json.array("denominations").required("denominations")?;
        let denominations = crate::decode::expect_many(items)?;

        Ok(Self {
            id: name.clone(),
            code: json.string("code").required("code")?,
            currency_type: json.string("type").required("type")?,
            blockchain_id: json.string("blockchain_id").required("blockchain_id")?,
            address: json.string("address").optional(),
            denominations,
            name,
        })
    }
}

impl Currency {
    /// Build a currency directly, for catalog tables and test fixtures.
    pub fn with_denominations(
        id: impl Into<String>,
        name: impl Into<String>,
        code: impl Into<String>,
        currency_type: impl Into<String>,
        blockchain_id: impl Into<String>,
        address: Option<&str>,
        denominations: Vec<CurrencyDenomination>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            currency_type: currency_type.into(),
            blockchain_id: blockchain_id.into(),
            address: address.map(ToString::to_string),
            denominations,
        }
    }
}

impl CurrencyDenomination {
    /// Build a denomination with the symbol derived from the code table.
    pub fn new(name: impl Into<String>, code: impl Into<String>, decimals: u8) -> Self {
        let code = code.into();
        Self {
            name: name.into(),
            symbol: lookup_symbol(&code),
            decimals,
            code,
        }
    }
}
