/*!
# Campaign State and Derived Flags

[`CampaignState`] mirrors what the contract reports for one campaign. The
contract owns every invariant (goal math, deadlines, refund accounting); this
module only derives the values that decide which actions a caller is offered.

The derived values must be recomputed from freshly read state on every
refresh. [`CampaignStatus::derive`] does that in one place.
*/

use crate::Address;
use chrono::DateTime;
use serde::{Deserialize, Serialize};

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_MINUTE: u64 = 60;

/// On-chain campaign fields as returned by the contract's view functions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignState {
    pub owner: Address,
    /// Target total in wei
    pub goal: u128,
    /// Unix seconds
    pub deadline: u64,
    pub total_contributed: u128,
    /// Contract-computed remaining seconds, 0 once expired
    pub time_left: u64,
    pub goal_reached: bool,
    pub funds_withdrawn: bool,
    /// `contributions(caller)`; zero address when no wallet is connected
    pub user_contribution: u128,
}

impl CampaignState {
    /// Funding progress in percent. Not capped: an overfunded campaign reports more than 100.
    pub fn progress_percentage(&self) -> f64 {
        if self.goal == 0 {
            return 0.0;
        }
        self.total_contributed as f64 * 100.0 / self.goal as f64
    }

    pub fn is_campaign_active(&self) -> bool {
        self.time_left > 0 && !self.goal_reached
    }

    pub fn can_get_refund(&self) -> bool {
        self.user_contribution > 0 && self.time_left == 0 && !self.goal_reached
    }

    pub fn can_withdraw(&self, caller: Option<&Address>) -> bool {
        match caller {
            Some(caller) => {
                *caller == self.owner && self.goal_reached && !self.funds_withdrawn
            }
            None => false,
        }
    }

    pub fn phase(&self) -> CampaignPhase {
        if self.goal_reached {
            CampaignPhase::GoalReached
        } else if self.time_left > 0 {
            CampaignPhase::Active
        } else {
            CampaignPhase::Ended
        }
    }
}

/// Status badge shown at the top of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignPhase {
    GoalReached,
    Active,
    Ended,
}

impl CampaignPhase {
    pub fn label(&self) -> &'static str {
        match self {
            CampaignPhase::GoalReached => "Goal Reached",
            CampaignPhase::Active => "Active",
            CampaignPhase::Ended => "Ended",
        }
    }
}

/// A campaign snapshot together with the flags derived for one caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignStatus {
    pub state: CampaignState,
    pub account: Option<Address>,
    pub progress_percentage: f64,
    pub is_campaign_active: bool,
    pub can_get_refund: bool,
    pub can_withdraw: bool,
    pub phase: CampaignPhase,
}

impl CampaignStatus {
    pub fn derive(state: CampaignState, account: Option<Address>) -> Self {
        Self {
            progress_percentage: state.progress_percentage(),
            is_campaign_active: state.is_campaign_active(),
            can_get_refund: state.can_get_refund(),
            can_withdraw: state.can_withdraw(account.as_ref()),
            phase: state.phase(),
            state,
            account,
        }
    }

    /// Neither withdraw nor refund is available to this caller.
    pub fn has_no_actions(&self) -> bool {
        !self.can_withdraw && !self.can_get_refund
    }
}

/// Remaining time in the coarsest two units, e.g. `"3 days, 4 hours"`.
pub fn format_time_left(seconds: u64) -> String {
    if seconds == 0 {
        return "Campaign ended".to_string();
    }

    let days = seconds / SECONDS_PER_DAY;
    let hours = (seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;

    if days >= 1 {
        format!("{} days, {} hours", days, hours)
    } else if hours >= 1 {
        format!("{} hours, {} minutes", hours, minutes)
    } else {
        format!("{} minutes", minutes)
    }
}

pub fn format_deadline(unix_seconds: u64) -> String {
    i64::try_from(unix_seconds)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "Invalid timestamp".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> Address {
        "0xAbCdEf0000000000000000000000000000000001".parse().unwrap()
    }

    fn stranger() -> Address {
        "0x2222222222222222222222222222222222222222".parse().unwrap()
    }

    fn state(goal: u128, total: u128, time_left: u64) -> CampaignState {
        CampaignState {
            owner: owner(),
            goal,
            deadline: 1_700_000_000,
            total_contributed: total,
            time_left,
            goal_reached: total >= goal,
            funds_withdrawn: false,
            user_contribution: 0,
        }
    }

    #[test]
    fn test_is_campaign_active_truth_table() {
        for time_left in [0u64, 1, 86_400] {
            for goal_reached in [false, true] {
                let mut s = state(10, 0, time_left);
                s.goal_reached = goal_reached;
                assert_eq!(
                    s.is_campaign_active(),
                    time_left > 0 && !goal_reached,
                    "time_left={time_left} goal_reached={goal_reached}"
                );
            }
        }
    }

    #[test]
    fn test_can_get_refund_truth_table() {
        for contribution in [0u128, 1, 5] {
            for time_left in [0u64, 60] {
                for goal_reached in [false, true] {
                    let mut s = state(10, 4, time_left);
                    s.goal_reached = goal_reached;
                    s.user_contribution = contribution;
                    assert_eq!(
                        s.can_get_refund(),
                        contribution > 0 && time_left == 0 && !goal_reached
                    );
                }
            }
        }
    }

    #[test]
    fn test_can_withdraw_truth_table() {
        let lowercase_owner: Address = owner().to_string().to_lowercase().parse().unwrap();
        for caller in [None, Some(owner()), Some(lowercase_owner), Some(stranger())] {
            for goal_reached in [false, true] {
                for funds_withdrawn in [false, true] {
                    let mut s = state(10, 10, 0);
                    s.goal_reached = goal_reached;
                    s.funds_withdrawn = funds_withdrawn;
                    let is_owner = caller == Some(owner());
                    assert_eq!(
                        s.can_withdraw(caller.as_ref()),
                        is_owner && goal_reached && !funds_withdrawn
                    );
                }
            }
        }
    }

    #[test]
    fn test_progress_percentage() {
        assert_eq!(state(0, 0, 0).progress_percentage(), 0.0);
        assert_eq!(state(0, 5, 0).progress_percentage(), 0.0);
        assert_eq!(state(10, 4, 0).progress_percentage(), 40.0);
        assert_eq!(state(10, 25, 0).progress_percentage(), 250.0);
    }

    #[test]
    fn test_goal_met_after_deadline() {
        let status = CampaignStatus::derive(state(10, 10, 0), Some(owner()));
        assert!(status.state.goal_reached);
        assert!(!status.is_campaign_active);
        assert!(!status.can_get_refund);
        assert!(status.can_withdraw);
        assert_eq!(status.phase, CampaignPhase::GoalReached);

        let status = CampaignStatus::derive(state(10, 10, 0), Some(stranger()));
        assert!(!status.can_withdraw);
        assert!(status.has_no_actions());
    }

    #[test]
    fn test_goal_missed_after_deadline() {
        let mut s = state(10, 4, 0);
        s.user_contribution = 4;
        let status = CampaignStatus::derive(s, Some(stranger()));
        assert!(!status.state.goal_reached);
        assert!(status.can_get_refund);
        assert!(!status.can_withdraw);
        assert_eq!(status.phase, CampaignPhase::Ended);
    }

    #[test]
    fn test_format_time_left() {
        assert_eq!(format_time_left(0), "Campaign ended");
        assert_eq!(format_time_left(59), "0 minutes");
        assert_eq!(format_time_left(61 * 60), "1 hours, 1 minutes");
        assert_eq!(format_time_left(3 * 86_400 + 4 * 3_600 + 59), "3 days, 4 hours");
    }

    #[test]
    fn test_format_deadline() {
        assert_eq!(format_deadline(0), "1970-01-01 00:00:00 UTC");
        assert_eq!(format_deadline(u64::MAX), "Invalid timestamp");
    }
}
