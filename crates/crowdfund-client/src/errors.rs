use crate::types::TxHash;
use crowdfund_sdk::{AbiError, AddressError};
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),

    #[error("ABI error: {0}")]
    Abi(#[from] AbiError),

    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    #[error("Wallet not connected")]
    WalletNotConnected,

    #[error("Wallet returned no accounts")]
    NoAccounts,

    #[error("Wrong network: expected chain {expected}, wallet is on chain {actual}")]
    WrongNetwork { expected: u64, actual: u64 },

    #[error("Transaction pending: {0}")]
    ReceiptPending(TxHash),

    #[error("Transaction {0} was not confirmed in time")]
    ConfirmationTimeout(TxHash),

    #[error("Transaction {0} reverted")]
    Reverted(TxHash),

    #[error("Transaction {0} did not create a contract")]
    MissingContractAddress(TxHash),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Errors worth polling through: transport failures and node-side server errors
    /// (JSON-RPC internal error and the -32000..=-32099 server range).
    pub fn is_transient(&self) -> bool {
        match self {
            ClientError::Transport(_) => true,
            ClientError::Rpc { code, .. } => *code == -32603 || (-32099..=-32000).contains(code),
            _ => false,
        }
    }
}
