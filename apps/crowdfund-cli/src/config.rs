use crate::error::{CliError, CliResult};
use crowdfund_client::{
    crowdfund_sdk::Address, ClientConfig, ConfirmationConfig, ConnectorConfig, NetworkConfig,
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};

const DEFAULT_POLL_INTERVAL_SECS: u64 = 4;
const DEFAULT_CONFIRMATION_TIMEOUT_SECS: u64 = 300;

/// CLI configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Target network; defaults to Westend Asset Hub
    #[serde(default)]
    pub network: NetworkConfig,

    /// Wallet connector
    #[serde(default)]
    pub connector: ConnectorConfig,

    /// Seconds between campaign refreshes in `watch`
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// How long to wait for a receipt before giving up
    #[serde(default = "default_confirmation_timeout_secs")]
    pub confirmation_timeout_secs: u64,

    /// Act as this account instead of asking the wallet
    #[serde(default)]
    pub from: Option<Address>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            connector: ConnectorConfig::default(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            confirmation_timeout_secs: DEFAULT_CONFIRMATION_TIMEOUT_SECS,
            from: None,
        }
    }
}

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

fn default_confirmation_timeout_secs() -> u64 {
    DEFAULT_CONFIRMATION_TIMEOUT_SECS
}

impl CliConfig {
    /// Load from a YAML file, or defaults when no file is given.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let config = match path {
            Some(path) => {
                let contents = fs::read_to_string(path)?;
                serde_yaml::from_str(&contents)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Command-line flags win over the file.
    pub fn with_overrides(mut self, rpc_url: Option<String>, from: Option<Address>) -> Self {
        if let Some(rpc_url) = rpc_url {
            self.network.rpc_url = rpc_url;
        }
        if from.is_some() {
            self.from = from;
        }
        self
    }

    fn validate(&self) -> CliResult<()> {
        if self.poll_interval_secs == 0 {
            return Err(CliError::InvalidConfig(
                "poll_interval_secs must be greater than zero".to_string(),
            ));
        }
        if self.confirmation_timeout_secs == 0 {
            return Err(CliError::InvalidConfig(
                "confirmation_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            network: self.network.clone(),
            connector: self.connector.clone(),
            poll_interval: Duration::from_secs(self.poll_interval_secs),
            confirmation: ConfirmationConfig::with_timeout(Duration::from_secs(
                self.confirmation_timeout_secs,
            )),
        }
    }
}
