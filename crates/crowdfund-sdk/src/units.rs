/*!
# Ether Units

Conversion between human decimal amounts (as typed into a form) and the
chain's base unit. The network's native token uses 18 decimals.
*/

use rust_decimal::prelude::*;
use thiserror::Error;

pub const ETHER_DECIMALS: u32 = 18;
pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitsError {
    #[error("Amount is empty")]
    Empty,

    #[error("Invalid amount: {0}")]
    InvalidNumber(String),

    #[error("Amount must not be negative")]
    Negative,

    #[error("Amount must be greater than zero")]
    Zero,

    #[error("Too many decimal places: {0} (max {ETHER_DECIMALS})")]
    TooPrecise(u32),

    #[error("Amount too large")]
    Overflow,
}

pub type UnitsResult<T> = Result<T, UnitsError>;

/// Parse a decimal ether amount into wei.
pub fn parse_ether(input: &str) -> UnitsResult<u128> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UnitsError::Empty);
    }

    let amount = Decimal::from_str(trimmed)
        .map_err(|_| UnitsError::InvalidNumber(trimmed.to_string()))?
        .normalize();

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(UnitsError::Negative);
    }
    if amount.scale() > ETHER_DECIMALS {
        return Err(UnitsError::TooPrecise(amount.scale()));
    }

    let mantissa = amount.mantissa().unsigned_abs();
    let multiplier = 10u128.pow(ETHER_DECIMALS - amount.scale());
    mantissa.checked_mul(multiplier).ok_or(UnitsError::Overflow)
}

/// Like [`parse_ether`], but zero is rejected. Used for contribution input.
pub fn parse_positive_ether(input: &str) -> UnitsResult<u128> {
    match parse_ether(input)? {
        0 => Err(UnitsError::Zero),
        wei => Ok(wei),
    }
}

/// Format wei as a decimal ether amount without trailing zeros.
pub fn format_ether(wei: u128) -> String {
    let whole = wei / WEI_PER_ETHER;
    let fraction = wei % WEI_PER_ETHER;
    if fraction == 0 {
        return whole.to_string();
    }

    let fraction = format!("{:018}", fraction);
    format!("{}.{}", whole, fraction.trim_end_matches('0'))
}
