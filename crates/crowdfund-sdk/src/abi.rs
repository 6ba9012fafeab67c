/*!
# Contract ABI Encoding

Minimal Solidity ABI support for the campaign contract: every argument and
return value it uses is a single static 32-byte word (`address`, `uint256`,
`bool`), so no dynamic-type encoding is needed.

Amounts are carried as `u128` wei. Decoding a `uint256` whose upper 16 bytes
are non-zero fails with [`AbiError::Overflow`] rather than truncating.
*/

use crate::Address;
use sha3::{Digest, Keccak256};
use thiserror::Error;

pub const WORD_SIZE: usize = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AbiError {
    #[error("Return data too short: expected {expected} bytes, got {actual}")]
    ShortData { expected: usize, actual: usize },

    #[error("uint256 value does not fit in 128 bits")]
    Overflow,

    #[error("Invalid bool word")]
    InvalidBool,

    #[error("Invalid address word: upper 12 bytes must be zero")]
    InvalidAddress,

    #[error("Invalid hex data: {0}")]
    InvalidHex(String),
}

pub type AbiResult<T> = Result<T, AbiError>;

/// A single static ABI argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Address(Address),
    Uint(u128),
    Bool(bool),
}

impl Token {
    fn to_word(self) -> [u8; WORD_SIZE] {
        let mut word = [0u8; WORD_SIZE];
        match self {
            Token::Address(address) => word[12..].copy_from_slice(address.as_bytes()),
            Token::Uint(value) => word[16..].copy_from_slice(&value.to_be_bytes()),
            Token::Bool(value) => word[31] = value as u8,
        }
        word
    }
}

/// Function selector: first four bytes of keccak-256 of the canonical signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = Keccak256::digest(signature.as_bytes());
    let mut out = [0u8; 4];
    out.copy_from_slice(&hash[..4]);
    out
}

/// ABI-encode arguments without a selector (used for constructor arguments).
pub fn encode_args(tokens: &[Token]) -> Vec<u8> {
    let mut data = Vec::with_capacity(tokens.len() * WORD_SIZE);
    for token in tokens {
        data.extend_from_slice(&token.to_word());
    }
    data
}

/// Selector followed by the encoded arguments.
pub fn encode_call(signature: &str, tokens: &[Token]) -> Vec<u8> {
    let mut data = selector(signature).to_vec();
    data.extend(encode_args(tokens));
    data
}

fn first_word(data: &[u8]) -> AbiResult<&[u8]> {
    if data.len() < WORD_SIZE {
        return Err(AbiError::ShortData {
            expected: WORD_SIZE,
            actual: data.len(),
        });
    }
    Ok(&data[..WORD_SIZE])
}

pub fn decode_uint(data: &[u8]) -> AbiResult<u128> {
    let word = first_word(data)?;
    if word[..16].iter().any(|b| *b != 0) {
        return Err(AbiError::Overflow);
    }
    let mut low = [0u8; 16];
    low.copy_from_slice(&word[16..]);
    Ok(u128::from_be_bytes(low))
}

pub fn decode_bool(data: &[u8]) -> AbiResult<bool> {
    let word = first_word(data)?;
    if word[..31].iter().any(|b| *b != 0) {
        return Err(AbiError::InvalidBool);
    }
    match word[31] {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(AbiError::InvalidBool),
    }
}

pub fn decode_address(data: &[u8]) -> AbiResult<Address> {
    let word = first_word(data)?;
    if word[..12].iter().any(|b| *b != 0) {
        return Err(AbiError::InvalidAddress);
    }
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&word[12..]);
    Ok(Address::new(bytes))
}

/// `0x`-prefixed lowercase hex, the JSON-RPC `DATA` encoding.
pub fn to_hex_data(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

pub fn from_hex_data(s: &str) -> AbiResult<Vec<u8>> {
    let digits = s.trim().strip_prefix("0x").unwrap_or(s.trim());
    hex::decode(digits).map_err(|e| AbiError::InvalidHex(e.to_string()))
}
