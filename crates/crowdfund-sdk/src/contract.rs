/*!
# Campaign Contract Interface

Call-data builders for the deployed crowdfunding contract. Like the rest of
the SDK these make no RPC calls: they return bytes that the client puts into
an `eth_call` or `eth_sendTransaction`.

## View functions

`owner()`, `goal()`, `deadline()`, `totalContributed()`, `timeLeft()`,
`goalReached()`, `fundsWithdrawn()`, `contributions(address)`.

## Mutating functions

`contribute()` (payable), `withdraw()`, `refund()`, and the constructor
`(uint256 goal, uint256 durationSeconds)`.
*/

use crate::{
    abi::{encode_args, encode_call, Token},
    Address,
};

pub const CONTRIBUTE_SIGNATURE: &str = "contribute()";
pub const WITHDRAW_SIGNATURE: &str = "withdraw()";
pub const REFUND_SIGNATURE: &str = "refund()";

/// Read-only calls exposed by the campaign contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCall {
    Owner,
    Goal,
    Deadline,
    TotalContributed,
    TimeLeft,
    GoalReached,
    FundsWithdrawn,
    Contributions(Address),
}

impl ViewCall {
    pub fn signature(&self) -> &'static str {
        match self {
            ViewCall::Owner => "owner()",
            ViewCall::Goal => "goal()",
            ViewCall::Deadline => "deadline()",
            ViewCall::TotalContributed => "totalContributed()",
            ViewCall::TimeLeft => "timeLeft()",
            ViewCall::GoalReached => "goalReached()",
            ViewCall::FundsWithdrawn => "fundsWithdrawn()",
            ViewCall::Contributions(_) => "contributions(address)",
        }
    }

    pub fn calldata(&self) -> Vec<u8> {
        match self {
            ViewCall::Contributions(who) => {
                encode_call(self.signature(), &[Token::Address(*who)])
            }
            _ => encode_call(self.signature(), &[]),
        }
    }
}

pub fn build_contribute_call() -> Vec<u8> {
    encode_call(CONTRIBUTE_SIGNATURE, &[])
}

pub fn build_withdraw_call() -> Vec<u8> {
    encode_call(WITHDRAW_SIGNATURE, &[])
}

pub fn build_refund_call() -> Vec<u8> {
    encode_call(REFUND_SIGNATURE, &[])
}

/// Contract-creation data: creation bytecode followed by the constructor arguments.
pub fn build_deploy_data(bytecode: &[u8], goal_wei: u128, duration_seconds: u64) -> Vec<u8> {
    let mut data = bytecode.to_vec();
    data.extend(encode_args(&[
        Token::Uint(goal_wei),
        Token::Uint(duration_seconds as u128),
    ]));
    data
}
