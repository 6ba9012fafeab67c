/*!
# Campaign Reads

Read-only `eth_call`s against a campaign contract. The reads are independent
and idempotent, so [`CampaignReader::read_state`] issues all eight at once and
fails as a whole if any one fails; callers never see partial state.
*/

use crate::{
    errors::{ClientError, ClientResult},
    provider::Provider,
};
use crowdfund_sdk::{
    abi::{decode_address, decode_bool, decode_uint, from_hex_data, to_hex_data},
    Address, CampaignState, ViewCall,
};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

pub struct CampaignReader<P> {
    provider: Arc<P>,
}

impl<P> Clone for CampaignReader<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

impl<P: Provider> CampaignReader<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Raw return data of a view call at the latest block
    pub async fn call(&self, contract: &Address, call: ViewCall) -> ClientResult<Vec<u8>> {
        let params = json!([
            {
                "to": contract.to_string(),
                "data": to_hex_data(&call.calldata()),
            },
            "latest"
        ]);
        let value = self.provider.request("eth_call", params).await?;
        let data = value.as_str().ok_or_else(|| {
            ClientError::InvalidResponse(format!("{}: expected hex data", call.signature()))
        })?;
        Ok(from_hex_data(data)?)
    }

    async fn call_uint(&self, contract: &Address, call: ViewCall) -> ClientResult<u128> {
        Ok(decode_uint(&self.call(contract, call).await?)?)
    }

    async fn call_u64(&self, contract: &Address, call: ViewCall) -> ClientResult<u64> {
        let value = self.call_uint(contract, call).await?;
        u64::try_from(value).map_err(|_| {
            ClientError::InvalidResponse(format!("{} out of range: {}", call.signature(), value))
        })
    }

    async fn call_bool(&self, contract: &Address, call: ViewCall) -> ClientResult<bool> {
        Ok(decode_bool(&self.call(contract, call).await?)?)
    }

    pub async fn owner(&self, contract: &Address) -> ClientResult<Address> {
        Ok(decode_address(&self.call(contract, ViewCall::Owner).await?)?)
    }

    pub async fn goal(&self, contract: &Address) -> ClientResult<u128> {
        self.call_uint(contract, ViewCall::Goal).await
    }

    pub async fn deadline(&self, contract: &Address) -> ClientResult<u64> {
        self.call_u64(contract, ViewCall::Deadline).await
    }

    pub async fn total_contributed(&self, contract: &Address) -> ClientResult<u128> {
        self.call_uint(contract, ViewCall::TotalContributed).await
    }

    pub async fn time_left(&self, contract: &Address) -> ClientResult<u64> {
        self.call_u64(contract, ViewCall::TimeLeft).await
    }

    pub async fn goal_reached(&self, contract: &Address) -> ClientResult<bool> {
        self.call_bool(contract, ViewCall::GoalReached).await
    }

    pub async fn funds_withdrawn(&self, contract: &Address) -> ClientResult<bool> {
        self.call_bool(contract, ViewCall::FundsWithdrawn).await
    }

    pub async fn contributions(&self, contract: &Address, who: &Address) -> ClientResult<u128> {
        self.call_uint(contract, ViewCall::Contributions(*who)).await
    }

    /// All campaign fields, read concurrently. Without a caller the zero address is used.
    pub async fn read_state(
        &self,
        contract: &Address,
        caller: Option<&Address>,
    ) -> ClientResult<CampaignState> {
        let who = caller.copied().unwrap_or(Address::ZERO);

        let (
            owner,
            goal,
            deadline,
            total_contributed,
            time_left,
            goal_reached,
            funds_withdrawn,
            user_contribution,
        ) = futures::try_join!(
            self.owner(contract),
            self.goal(contract),
            self.deadline(contract),
            self.total_contributed(contract),
            self.time_left(contract),
            self.goal_reached(contract),
            self.funds_withdrawn(contract),
            self.contributions(contract, &who),
        )?;

        debug!(
            contract = %contract,
            total_contributed = %total_contributed,
            goal = %goal,
            time_left,
            "campaign state read"
        );

        Ok(CampaignState {
            owner,
            goal,
            deadline,
            total_contributed,
            time_left,
            goal_reached,
            funds_withdrawn,
            user_contribution,
        })
    }
}
