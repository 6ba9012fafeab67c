use backoff::ExponentialBackoff;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const WESTEND_ASSET_HUB_CHAIN_ID: u64 = 420_420_421;
pub const WESTEND_ASSET_HUB_RPC_URL: &str = "https://westend-asset-hub-eth-rpc.polkadot.io";

/// The single network the client targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub name: String,
    pub chain_id: u64,
    pub rpc_url: String,
    /// Symbol shown next to amounts
    pub currency_symbol: String,
}

impl NetworkConfig {
    pub fn westend_asset_hub() -> Self {
        Self {
            name: "Westend Asset Hub".to_string(),
            chain_id: WESTEND_ASSET_HUB_CHAIN_ID,
            rpc_url: WESTEND_ASSET_HUB_RPC_URL.to_string(),
            currency_symbol: "WND".to_string(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::westend_asset_hub()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorKind {
    /// A wallet exposing the EIP-1193 request interface (accounts and signing live in the wallet)
    #[default]
    Injected,
}

/// The one wallet connector the client uses
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConnectorConfig {
    #[serde(default)]
    pub kind: ConnectorKind,

    /// Wallet endpoint; falls back to the network RPC URL
    #[serde(default)]
    pub url: Option<String>,
}

impl ConnectorConfig {
    pub fn endpoint<'a>(&'a self, network: &'a NetworkConfig) -> &'a str {
        self.url.as_deref().unwrap_or(&network.rpc_url)
    }
}

/// How long and how often to poll for a transaction receipt
#[derive(Debug, Clone)]
pub struct ConfirmationConfig {
    pub backoff: ExponentialBackoff,
}

impl ConfirmationConfig {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            backoff: ExponentialBackoff {
                max_elapsed_time: Some(timeout),
                ..Self::default().backoff
            },
        }
    }
}

impl Default for ConfirmationConfig {
    fn default() -> Self {
        Self {
            backoff: ExponentialBackoff {
                initial_interval: Duration::from_millis(500),
                max_interval: Duration::from_secs(10),
                max_elapsed_time: Some(Duration::from_secs(300)), // 5 minutes total
                multiplier: 1.5,
                ..Default::default()
            },
        }
    }
}

/// Client configuration, passed explicitly instead of living in global state
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub network: NetworkConfig,
    pub connector: ConnectorConfig,

    /// Interval of the campaign refresh loop
    pub poll_interval: Duration,

    pub confirmation: ConfirmationConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            connector: ConnectorConfig::default(),
            poll_interval: Duration::from_secs(4),
            confirmation: ConfirmationConfig::default(),
        }
    }
}
