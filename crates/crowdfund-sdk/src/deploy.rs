/*!
# Deployment Parameters

Turns the two deployment form inputs (goal amount and duration in days) into
constructor arguments. Only presence and parseability are checked here; the
advertised 1-365 day range is left to the contract.
*/

use crate::{
    campaign::SECONDS_PER_DAY,
    contract::build_deploy_data,
    units::{parse_ether, UnitsError},
};
use thiserror::Error;

pub const MIN_DURATION_DAYS: u64 = 1;
pub const MAX_DURATION_DAYS: u64 = 365;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeployInputError {
    #[error("Please fill in all fields")]
    MissingInformation,

    #[error("Invalid goal: {0}")]
    InvalidGoal(#[from] UnitsError),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),
}

/// Constructor arguments for a new campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployParams {
    pub goal_wei: u128,
    pub duration_days: u64,
    pub duration_seconds: u64,
}

impl DeployParams {
    pub fn from_inputs(goal: &str, duration_days: &str) -> Result<Self, DeployInputError> {
        let goal = goal.trim();
        let duration_days = duration_days.trim();
        if goal.is_empty() || duration_days.is_empty() {
            return Err(DeployInputError::MissingInformation);
        }

        let goal_wei = parse_ether(goal)?;
        let days: u64 = duration_days
            .parse()
            .map_err(|_| DeployInputError::InvalidDuration(duration_days.to_string()))?;
        let duration_seconds = days
            .checked_mul(SECONDS_PER_DAY)
            .ok_or_else(|| DeployInputError::InvalidDuration(duration_days.to_string()))?;

        Ok(Self {
            goal_wei,
            duration_days: days,
            duration_seconds,
        })
    }

    /// Whether the duration sits inside the range the form advertises.
    pub fn is_duration_in_advertised_range(&self) -> bool {
        (MIN_DURATION_DAYS..=MAX_DURATION_DAYS).contains(&self.duration_days)
    }

    pub fn deploy_data(&self, bytecode: &[u8]) -> Vec<u8> {
        build_deploy_data(bytecode, self.goal_wei, self.duration_seconds)
    }
}
