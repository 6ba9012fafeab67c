/*!
# Wallet Connection

Connection lifecycle for the single injected connector: request accounts,
confirm the wallet is on the configured network, and forget the account on
disconnect. Signing stays inside the wallet.
*/

use crate::{
    config::NetworkConfig,
    errors::{ClientError, ClientResult},
    provider::Provider,
    types::parse_quantity,
};
use crowdfund_sdk::Address;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

pub struct Wallet<P> {
    provider: Arc<P>,
    chain_id: u64,
    account: Option<Address>,
}

impl<P> Clone for Wallet<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            chain_id: self.chain_id,
            account: self.account,
        }
    }
}

impl<P: Provider> Wallet<P> {
    pub fn new(provider: Arc<P>, network: &NetworkConfig) -> Self {
        Self {
            provider,
            chain_id: network.chain_id,
            account: None,
        }
    }

    /// Use a known account without prompting the wallet (e.g. an unlocked node account).
    pub fn with_account(mut self, account: Address) -> Self {
        self.account = Some(account);
        self
    }

    pub fn provider(&self) -> &Arc<P> {
        &self.provider
    }

    pub fn account(&self) -> Option<Address> {
        self.account
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    /// The connected account, or `WalletNotConnected`
    pub fn require_account(&self) -> ClientResult<Address> {
        self.account.ok_or(ClientError::WalletNotConnected)
    }

    pub async fn connect(&mut self) -> ClientResult<Address> {
        let accounts = self
            .provider
            .request("eth_requestAccounts", json!([]))
            .await?;
        let accounts: Vec<Address> = serde_json::from_value(accounts)
            .map_err(|e| ClientError::InvalidResponse(format!("eth_requestAccounts: {e}")))?;
        let account = accounts.first().copied().ok_or(ClientError::NoAccounts)?;

        self.check_network().await?;

        info!(account = %account, chain_id = self.chain_id, "wallet connected");
        self.account = Some(account);
        Ok(account)
    }

    pub fn disconnect(&mut self) {
        if let Some(account) = self.account.take() {
            info!(account = %account, "wallet disconnected");
        }
    }

    pub async fn chain_id(&self) -> ClientResult<u64> {
        let value = self.provider.request("eth_chainId", json!([])).await?;
        let quantity = value
            .as_str()
            .ok_or_else(|| ClientError::InvalidResponse(format!("eth_chainId: {value}")))?;
        Ok(parse_quantity(quantity)? as u64)
    }

    pub async fn check_network(&self) -> ClientResult<()> {
        let actual = self.chain_id().await?;
        if actual != self.chain_id {
            return Err(ClientError::WrongNetwork {
                expected: self.chain_id,
                actual,
            });
        }
        Ok(())
    }

    /// Accounts the wallet currently exposes without prompting
    pub async fn accounts(&self) -> ClientResult<Vec<Address>> {
        let value: Value = self.provider.request("eth_accounts", json!([])).await?;
        serde_json::from_value(value)
            .map_err(|e| ClientError::InvalidResponse(format!("eth_accounts: {e}")))
    }
}
