/*!
# Deploy View

Controller for the deployment form: validate the two inputs, submit the
contract-creation transaction, wait for it to be mined, and hand back the
route of the new campaign.
*/

use crate::{
    errors::ClientError,
    feedback::Notice,
    transactions::TransactionSender,
    types::{TransactionRequest, TxHash},
    wallet::Wallet,
    ActionStatus, Provider,
};
use crowdfund_sdk::{Address, DeployInputError, DeployParams, Route};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("Wallet not connected")]
    NotConnected,

    #[error("Contract bytecode is empty")]
    EmptyBytecode,

    #[error(transparent)]
    Input(#[from] DeployInputError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl DeployError {
    pub fn notice(&self) -> Notice {
        match self {
            DeployError::Input(DeployInputError::MissingInformation) => {
                Notice::missing_information()
            }
            DeployError::NotConnected => Notice::error(
                "Wallet not connected",
                "You need to connect your wallet to deploy a campaign",
            ),
            _ => Notice::deployment_failed(),
        }
    }
}

/// A mined campaign deployment
#[derive(Debug, Clone)]
pub struct Deployment {
    pub hash: TxHash,
    pub params: DeployParams,
    pub contract: Address,
    pub notice: Notice,
}

impl Deployment {
    /// Where to navigate once the campaign exists
    pub fn route(&self) -> Route {
        Route::Campaign(self.contract.to_string())
    }
}

pub struct Deployer<P> {
    wallet: Wallet<P>,
    sender: TransactionSender<P>,
    status: ActionStatus,
}

impl<P: Provider> Deployer<P> {
    pub fn new(wallet: Wallet<P>, sender: TransactionSender<P>) -> Self {
        Self {
            wallet,
            sender,
            status: ActionStatus::Idle,
        }
    }

    pub fn status(&self) -> ActionStatus {
        self.status
    }

    pub fn wallet_mut(&mut self) -> &mut Wallet<P> {
        &mut self.wallet
    }

    /// Submit the creation transaction without waiting for it.
    pub async fn submit(
        &mut self,
        bytecode: &[u8],
        goal: &str,
        duration_days: &str,
    ) -> Result<(TxHash, DeployParams), DeployError> {
        let from = self.wallet.account().ok_or(DeployError::NotConnected)?;
        let params = DeployParams::from_inputs(goal, duration_days)?;
        if bytecode.is_empty() {
            return Err(DeployError::EmptyBytecode);
        }
        if !params.is_duration_in_advertised_range() {
            warn!(
                days = params.duration_days,
                "duration outside the advertised range; the contract decides"
            );
        }

        let request = TransactionRequest::create(from, params.deploy_data(bytecode));
        self.status = ActionStatus::Pending;
        let hash = match self.sender.submit(&request).await {
            Ok(hash) => hash,
            Err(e) => {
                self.status = ActionStatus::Idle;
                return Err(e.into());
            }
        };
        self.status = ActionStatus::Confirming;

        Ok((hash, params))
    }

    /// Submit, wait for the receipt, and return the new contract's address.
    pub async fn deploy(
        &mut self,
        bytecode: &[u8],
        goal: &str,
        duration_days: &str,
    ) -> Result<Deployment, DeployError> {
        let (hash, params) = self.submit(bytecode, goal, duration_days).await?;

        let receipt = self.sender.wait_for_receipt(hash).await;
        self.status = ActionStatus::Idle;
        let receipt = receipt?;

        let contract = receipt
            .contract_address
            .ok_or(ClientError::MissingContractAddress(hash))?;
        info!(
            %contract,
            %hash,
            goal_wei = %params.goal_wei,
            seconds = params.duration_seconds,
            "campaign deployed"
        );

        Ok(Deployment {
            hash,
            params,
            contract,
            notice: Notice::campaign_deployed(),
        })
    }
}
