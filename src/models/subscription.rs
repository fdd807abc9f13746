//! Subscription records

use serde_json::json;

use crate::decode::{FromJson, JsonView};
use crate::error::Result;
use crate::types::JsonValue;

/// Delivery endpoint for subscription notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionEndpoint {
    /// "develop" or "production"
    pub environment: String,
    /// Delivery kind, e.g. "apns"
    pub kind: String,
    pub value: String,
}

impl SubscriptionEndpoint {
    /// Build an endpoint
    pub fn new(
        environment: impl Into<String>,
        kind: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            environment: environment.into(),
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Encode for subscription creation requests
    pub fn to_json(&self) -> JsonValue {
        json!({
            "environment": self.environment,
            "kind": self.kind,
            "value": self.value,
        })
    }
}

impl FromJson for SubscriptionEndpoint {
    fn from_json(json: &JsonView<'_>) -> Result<Self> {
        Ok(Self {
            environment: json.string("environment").required("environment")?,
            kind: json.string("kind").required("kind")?,
            value: json.string("value").required("value")?,
        })
    }
}

/// A notification subscription for a wallet/device pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub id: String,
    pub wallet_id: String,
    pub device_id: String,
    pub endpoint: SubscriptionEndpoint,
}

impl FromJson for Subscription {
    fn from_json(json: &JsonView<'_>) -> Result<Self> {
        let endpoint = json.object("endpoint").required("endpoint")?;

        Ok(Self {
            id: json.string("subscription_id").required("subscription_id")?,
            wallet_id: json.string("wallet_id").required("wallet_id")?,
            device_id: json.string("device_id").required("device_id")?,
            endpoint: SubscriptionEndpoint::from_json(&endpoint)?,
        })
    }
}
