/*!
# Client Data Types

JSON-RPC shapes for transactions and receipts, and the `QUANTITY` hex encoding.
*/

use crate::errors::{ClientError, ClientResult};
use crowdfund_sdk::{abi::to_hex_data, Address};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::{fmt, str::FromStr};

/// Hash of a submitted transaction; the handle used to await confirmation
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxHash(pub [u8; 32]);

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxHash({})", self)
    }
}

impl FromStr for TxHash {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = crowdfund_sdk::abi::from_hex_data(s)?;
        let hash: [u8; 32] = bytes.try_into().map_err(|bytes: Vec<u8>| {
            ClientError::InvalidResponse(format!(
                "transaction hash must be 32 bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(hash))
    }
}

/// Encode an integer as a JSON-RPC `QUANTITY` (`0x`-prefixed, no leading zeros).
pub fn to_quantity(value: u128) -> String {
    format!("0x{:x}", value)
}

pub fn parse_quantity(s: &str) -> ClientResult<u128> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| ClientError::InvalidResponse(format!("quantity without 0x prefix: {s}")))?;
    if digits.is_empty() {
        return Err(ClientError::InvalidResponse("empty quantity".to_string()));
    }
    u128::from_str_radix(digits, 16)
        .map_err(|e| ClientError::InvalidResponse(format!("invalid quantity {s}: {e}")))
}

/// Parameters of `eth_sendTransaction`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    pub from: Address,
    /// `None` for contract creation
    pub to: Option<Address>,
    pub value: Option<u128>,
    pub data: Vec<u8>,
}

impl TransactionRequest {
    pub fn call(from: Address, to: Address, data: Vec<u8>) -> Self {
        Self {
            from,
            to: Some(to),
            value: None,
            data,
        }
    }

    pub fn create(from: Address, data: Vec<u8>) -> Self {
        Self {
            from,
            to: None,
            value: None,
            data,
        }
    }

    pub fn with_value(mut self, wei: u128) -> Self {
        self.value = Some(wei);
        self
    }

    pub fn to_rpc_object(&self) -> Value {
        let mut object = Map::new();
        object.insert("from".to_string(), json!(self.from.to_string()));
        if let Some(to) = &self.to {
            object.insert("to".to_string(), json!(to.to_string()));
        }
        if let Some(value) = self.value {
            object.insert("value".to_string(), json!(to_quantity(value)));
        }
        object.insert("data".to_string(), json!(to_hex_data(&self.data)));
        Value::Object(object)
    }
}

/// The parts of a receipt the client looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub transaction_hash: TxHash,
    pub success: bool,
    pub block_number: Option<u64>,
    pub contract_address: Option<Address>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RpcReceipt {
    transaction_hash: String,
    status: Option<String>,
    block_number: Option<String>,
    contract_address: Option<Address>,
}

impl TransactionReceipt {
    pub fn from_rpc(value: Value) -> ClientResult<Self> {
        let raw: RpcReceipt = serde_json::from_value(value)
            .map_err(|e| ClientError::InvalidResponse(format!("receipt: {e}")))?;

        let success = match raw.status.as_deref() {
            Some(status) => parse_quantity(status)? == 1,
            None => true,
        };
        let block_number = raw
            .block_number
            .as_deref()
            .map(parse_quantity)
            .transpose()?
            .map(|n| n as u64);

        Ok(Self {
            transaction_hash: raw.transaction_hash.parse()?,
            success,
            block_number,
            contract_address: raw.contract_address,
        })
    }
}
