/*!
# Campaign View

Controller for one campaign screen. It owns the last successfully read
[`CampaignStatus`], gates the three actions on the derived flags, and tracks
whether each action is waiting on the wallet or on confirmation.

The view never trusts a transaction's outcome directly: after a confirmation
it re-reads the contract, and the next status is whatever the chain reports.
The enablement checks here are only as fresh as the last read. A race (say,
someone else withdrew first) is left for the contract to reject.
*/

use crate::{
    errors::ClientError,
    feedback::Notice,
    reader::CampaignReader,
    transactions::TransactionSender,
    types::{TransactionReceipt, TransactionRequest, TxHash},
    wallet::Wallet,
    ClientResult, Provider,
};
use crowdfund_sdk::{
    build_contribute_call, build_refund_call, build_withdraw_call, parse_positive_ether, Address,
    AddressError, CampaignStatus, Route, UnitsError,
};
use std::{ops::ControlFlow, time::Duration};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Wallet not connected")]
    NotConnected,

    #[error("Campaign state has not been loaded")]
    NotLoaded,

    #[error("Campaign is not accepting contributions")]
    CampaignNotActive,

    #[error("Withdrawal is not available for this account")]
    WithdrawUnavailable,

    #[error("Refund is not available for this account")]
    RefundUnavailable,

    #[error("Invalid contribution amount: {0}")]
    InvalidAmount(#[from] UnitsError),

    #[error("Invalid campaign address: {0}")]
    InvalidCampaignAddress(#[from] AddressError),

    /// Submission failed; nothing reached the chain
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Submitted, but the outcome could not be confirmed
    #[error("Transaction not confirmed: {0}")]
    Confirmation(ClientError),

    /// Confirmed, but the campaign could not be re-read afterwards
    #[error("Campaign refresh failed: {0}")]
    Refresh(ClientError),
}

impl ActionError {
    /// Notice shown for this failure; all action failures are recoverable.
    pub fn notice(&self, kind: ActionKind) -> Notice {
        match (self, kind) {
            (ActionError::Client(_), ActionKind::Contribute) => {
                Notice::error("Error", "Failed to submit contribution.")
            }
            (ActionError::Confirmation(ClientError::ConfirmationTimeout(hash)), _) => {
                Notice::error(
                    "Transaction pending",
                    format!("Transaction {hash} was submitted but is not confirmed yet."),
                )
            }
            (ActionError::Confirmation(ClientError::Reverted(_)), _) => Notice::error(
                "Transaction failed",
                "The transaction was rejected by the campaign contract.",
            ),
            (ActionError::Refresh(e), _) => Notice::error(
                "Campaign not refreshed",
                format!("The transaction was confirmed, but the campaign could not be reloaded: {e}"),
            ),
            _ => Notice::error("Error", self.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Contribute,
    Withdraw,
    Refund,
}

/// Progress of one action kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionStatus {
    #[default]
    Idle,
    /// Waiting for the wallet to accept the transaction
    Pending,
    /// Submitted, waiting for the receipt
    Confirming,
}

impl ActionStatus {
    pub fn is_processing(&self) -> bool {
        !matches!(self, ActionStatus::Idle)
    }
}

/// Result of a successful submission
#[derive(Debug, Clone)]
pub struct Submission {
    pub kind: ActionKind,
    pub hash: TxHash,
    pub notice: Notice,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// No complete read has succeeded yet
    Loading,
    Ready(CampaignStatus),
}

pub struct CampaignView<P> {
    contract: String,
    reader: CampaignReader<P>,
    wallet: Wallet<P>,
    sender: TransactionSender<P>,
    state: ViewState,
    contribute_status: ActionStatus,
    withdraw_status: ActionStatus,
    refund_status: ActionStatus,
}

impl<P: Provider> CampaignView<P> {
    /// `contract` is kept verbatim; it is only parsed when the view reads or submits.
    pub fn new(
        contract: impl Into<String>,
        reader: CampaignReader<P>,
        wallet: Wallet<P>,
        sender: TransactionSender<P>,
    ) -> Self {
        Self {
            contract: contract.into(),
            reader,
            wallet,
            sender,
            state: ViewState::Loading,
            contribute_status: ActionStatus::Idle,
            withdraw_status: ActionStatus::Idle,
            refund_status: ActionStatus::Idle,
        }
    }

    pub fn route(&self) -> Route {
        Route::Campaign(self.contract.clone())
    }

    pub fn contract_input(&self) -> &str {
        &self.contract
    }

    pub fn contract_address(&self) -> Result<Address, AddressError> {
        self.contract.parse()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn status(&self) -> Option<&CampaignStatus> {
        match &self.state {
            ViewState::Ready(status) => Some(status),
            ViewState::Loading => None,
        }
    }

    pub fn wallet(&self) -> &Wallet<P> {
        &self.wallet
    }

    pub fn wallet_mut(&mut self) -> &mut Wallet<P> {
        &mut self.wallet
    }

    pub fn action_status(&self, kind: ActionKind) -> ActionStatus {
        match kind {
            ActionKind::Contribute => self.contribute_status,
            ActionKind::Withdraw => self.withdraw_status,
            ActionKind::Refund => self.refund_status,
        }
    }

    fn set_action_status(&mut self, kind: ActionKind, status: ActionStatus) {
        match kind {
            ActionKind::Contribute => self.contribute_status = status,
            ActionKind::Withdraw => self.withdraw_status = status,
            ActionKind::Refund => self.refund_status = status,
        }
    }

    /// Re-read every field and recompute the derived flags.
    ///
    /// On failure the previous state is kept and the error returned.
    pub async fn refresh(&mut self) -> ClientResult<CampaignStatus> {
        let contract = self.contract_address()?;
        let account = self.wallet.account();
        let state = self.reader.read_state(&contract, account.as_ref()).await?;

        let status = CampaignStatus::derive(state, account);
        self.state = ViewState::Ready(status.clone());
        Ok(status)
    }

    /// Refresh on a fixed interval until `on_update` breaks.
    ///
    /// Read failures are reported to the callback and do not stop the loop.
    pub async fn watch<F>(&mut self, interval: Duration, mut on_update: F)
    where
        F: FnMut(&ViewState, Option<&ClientError>) -> ControlFlow<()>,
    {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let error = self.refresh().await.err();
            if let Some(e) = &error {
                warn!(contract = %self.contract, "campaign refresh failed: {}", e);
            }
            if on_update(&self.state, error.as_ref()).is_break() {
                return;
            }
        }
    }

    fn ready_status(&self) -> Result<&CampaignStatus, ActionError> {
        self.status().ok_or(ActionError::NotLoaded)
    }

    /// Contribute a decimal amount. Empty, non-numeric or zero input never reaches the wallet.
    pub async fn contribute(&mut self, amount: &str) -> Result<Submission, ActionError> {
        let from = self.wallet.account().ok_or(ActionError::NotConnected)?;
        if !self.ready_status()?.is_campaign_active {
            return Err(ActionError::CampaignNotActive);
        }
        let wei = parse_positive_ether(amount)?;
        let contract = self.contract_address()?;

        let request = TransactionRequest::call(from, contract, build_contribute_call())
            .with_value(wei);
        self.submit(ActionKind::Contribute, request, Notice::contribution_submitted())
            .await
    }

    pub async fn withdraw(&mut self) -> Result<Submission, ActionError> {
        let from = self.wallet.account().ok_or(ActionError::NotConnected)?;
        if !self.ready_status()?.can_withdraw {
            return Err(ActionError::WithdrawUnavailable);
        }
        let contract = self.contract_address()?;

        let request = TransactionRequest::call(from, contract, build_withdraw_call());
        self.submit(ActionKind::Withdraw, request, Notice::withdrawal_submitted())
            .await
    }

    pub async fn refund(&mut self) -> Result<Submission, ActionError> {
        let from = self.wallet.account().ok_or(ActionError::NotConnected)?;
        if !self.ready_status()?.can_get_refund {
            return Err(ActionError::RefundUnavailable);
        }
        let contract = self.contract_address()?;

        let request = TransactionRequest::call(from, contract, build_refund_call());
        self.submit(ActionKind::Refund, request, Notice::refund_requested())
            .await
    }

    async fn submit(
        &mut self,
        kind: ActionKind,
        request: TransactionRequest,
        notice: Notice,
    ) -> Result<Submission, ActionError> {
        self.set_action_status(kind, ActionStatus::Pending);
        match self.sender.submit(&request).await {
            Ok(hash) => {
                self.set_action_status(kind, ActionStatus::Confirming);
                info!(?kind, %hash, contract = %self.contract, "campaign action submitted");
                Ok(Submission { kind, hash, notice })
            }
            Err(e) => {
                self.set_action_status(kind, ActionStatus::Idle);
                Err(e.into())
            }
        }
    }

    /// Wait for a submission to be mined, then re-read the campaign.
    ///
    /// The campaign is re-read whatever the outcome. A confirmation failure
    /// takes precedence over a refresh failure.
    pub async fn confirm(
        &mut self,
        submission: &Submission,
    ) -> Result<TransactionReceipt, ActionError> {
        let outcome = self.sender.wait_for_receipt(submission.hash).await;
        self.set_action_status(submission.kind, ActionStatus::Idle);

        let refreshed = self.refresh().await;
        let receipt = outcome.map_err(ActionError::Confirmation)?;
        refreshed.map_err(ActionError::Refresh)?;
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_failure_notice() {
        let error = ActionError::Client(ClientError::Rpc {
            code: 4001,
            message: "User rejected the request.".to_string(),
        });
        assert_eq!(
            error.notice(ActionKind::Contribute).description,
            "Failed to submit contribution."
        );
    }

    #[test]
    fn test_confirmation_notices_do_not_claim_submission_failed() {
        let hash = TxHash([0xab; 32]);

        let pending = ActionError::Confirmation(ClientError::ConfirmationTimeout(hash))
            .notice(ActionKind::Contribute);
        assert!(pending.is_error());
        assert_eq!(pending.title, "Transaction pending");
        assert!(pending.description.contains(&hash.to_string()));

        let reverted =
            ActionError::Confirmation(ClientError::Reverted(hash)).notice(ActionKind::Withdraw);
        assert_eq!(reverted.title, "Transaction failed");

        let refresh = ActionError::Refresh(ClientError::Rpc {
            code: -32000,
            message: "header not found".to_string(),
        })
        .notice(ActionKind::Contribute);
        assert_eq!(refresh.title, "Campaign not refreshed");
        assert!(refresh.description.starts_with("The transaction was confirmed"));
    }
}
