/*!
# Transaction Submission and Confirmation

Submission is a single `eth_sendTransaction` through the wallet; failures are
returned to the caller and never retried. Confirmation is a separate step
keyed by the returned hash: the receipt is polled with exponential backoff
until it appears or the configured time budget runs out. A submitted
transaction cannot be cancelled from here, only observed.
*/

use crate::{
    config::ConfirmationConfig,
    errors::{ClientError, ClientResult},
    provider::Provider,
    types::{TransactionReceipt, TransactionRequest, TxHash},
};
use backoff::future::retry;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct TransactionSender<P> {
    provider: Arc<P>,
    confirmation: ConfirmationConfig,
}

impl<P> Clone for TransactionSender<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            confirmation: self.confirmation.clone(),
        }
    }
}

impl<P: Provider> TransactionSender<P> {
    pub fn new(provider: Arc<P>, confirmation: ConfirmationConfig) -> Self {
        Self {
            provider,
            confirmation,
        }
    }

    /// Hand the transaction to the wallet and return its hash
    pub async fn submit(&self, request: &TransactionRequest) -> ClientResult<TxHash> {
        let value = self
            .provider
            .request("eth_sendTransaction", json!([request.to_rpc_object()]))
            .await
            .inspect_err(|e| warn!(from = %request.from, "transaction submission failed: {}", e))?;

        let hash: TxHash = value
            .as_str()
            .ok_or_else(|| ClientError::InvalidResponse(format!("eth_sendTransaction: {value}")))?
            .parse()?;

        info!(%hash, from = %request.from, "transaction submitted");
        Ok(hash)
    }

    /// Current receipt, or `None` while the transaction is pending
    pub async fn receipt(&self, hash: TxHash) -> ClientResult<Option<TransactionReceipt>> {
        let value = self
            .provider
            .request("eth_getTransactionReceipt", json!([hash.to_string()]))
            .await?;
        if value.is_null() {
            return Ok(None);
        }
        TransactionReceipt::from_rpc(value).map(Some)
    }

    /// Poll until the transaction is mined. A reverted transaction is an error.
    ///
    /// Transport and node-side errors during polling are retried within the same
    /// budget; only malformed responses end the wait early.
    pub async fn wait_for_receipt(&self, hash: TxHash) -> ClientResult<TransactionReceipt> {
        let result = retry(self.confirmation.backoff.clone(), || async move {
            match self.receipt(hash).await {
                Ok(Some(receipt)) => Ok(receipt),
                Ok(None) => {
                    debug!(%hash, "receipt not yet available");
                    Err(backoff::Error::Transient {
                        err: ClientError::ReceiptPending(hash),
                        retry_after: None,
                    })
                }
                Err(e) if e.is_transient() => {
                    warn!(%hash, "receipt poll failed, retrying: {}", e);
                    Err(backoff::Error::Transient {
                        err: ClientError::ReceiptPending(hash),
                        retry_after: None,
                    })
                }
                Err(e) => Err(backoff::Error::Permanent(e)),
            }
        })
        .await;

        let receipt = result.map_err(|e| match e {
            ClientError::ReceiptPending(hash) => ClientError::ConfirmationTimeout(hash),
            other => other,
        })?;

        if !receipt.success {
            warn!(%hash, "transaction reverted");
            return Err(ClientError::Reverted(hash));
        }

        info!(%hash, block = ?receipt.block_number, "transaction confirmed");
        Ok(receipt)
    }
}
