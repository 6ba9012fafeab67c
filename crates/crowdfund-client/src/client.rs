/*!
# Crowdfund Client

Owns the configuration, the read and wallet providers, and the wallet
connection. Views are created from it and receive a copy of the current
wallet state.
*/

use crate::{
    campaign_view::CampaignView,
    config::ClientConfig,
    deploy_view::Deployer,
    errors::ClientResult,
    provider::{HttpProvider, Provider},
    reader::CampaignReader,
    transactions::TransactionSender,
    wallet::Wallet,
};
use crowdfund_sdk::Address;
use std::sync::Arc;

pub struct CrowdfundClient<P> {
    config: ClientConfig,
    read_provider: Arc<P>,
    wallet: Wallet<P>,
}

impl CrowdfundClient<HttpProvider> {
    /// Reads go to the network RPC; wallet calls go to the connector endpoint.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let read_provider = Arc::new(HttpProvider::new(&config.network.rpc_url)?);
        let wallet_provider = Arc::new(HttpProvider::new(
            config.connector.endpoint(&config.network),
        )?);
        Ok(Self::with_providers(config, read_provider, wallet_provider))
    }
}

impl<P: Provider> CrowdfundClient<P> {
    pub fn with_providers(config: ClientConfig, read_provider: Arc<P>, wallet_provider: Arc<P>) -> Self {
        let wallet = Wallet::new(wallet_provider, &config.network);
        Self {
            config,
            read_provider,
            wallet,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn wallet(&self) -> &Wallet<P> {
        &self.wallet
    }

    pub fn account(&self) -> Option<Address> {
        self.wallet.account()
    }

    pub async fn connect(&mut self) -> ClientResult<Address> {
        self.wallet.connect().await
    }

    pub fn disconnect(&mut self) {
        self.wallet.disconnect();
    }

    /// Act as `account` without prompting the wallet
    pub fn use_account(&mut self, account: Address) {
        self.wallet = self.wallet.clone().with_account(account);
    }

    pub fn reader(&self) -> CampaignReader<P> {
        CampaignReader::new(Arc::clone(&self.read_provider))
    }

    pub fn sender(&self) -> TransactionSender<P> {
        TransactionSender::new(
            Arc::clone(self.wallet.provider()),
            self.config.confirmation.clone(),
        )
    }

    /// View for `/campaign/{address}`; the address is taken verbatim.
    pub fn campaign_view(&self, contract: impl Into<String>) -> CampaignView<P> {
        CampaignView::new(contract, self.reader(), self.wallet.clone(), self.sender())
    }

    pub fn deployer(&self) -> Deployer<P> {
        Deployer::new(self.wallet.clone(), self.sender())
    }
}
