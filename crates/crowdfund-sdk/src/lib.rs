/*!
# Crowdfund SDK

RPC-independent building blocks for talking to a deployed crowdfunding
campaign contract.

## Contents

- **Addresses**: [`Address`] with case-insensitive parsing
- **ABI**: selectors and single-word encoding/decoding for the contract's calls
- **Units**: decimal ether input to wei and back
- **Campaign**: [`CampaignState`] and the derived action flags
- **Deploy**: constructor arguments from the deployment form
- **Routes**: the `/`, `/deploy` and `/campaign/{address}` screens

Nothing in this crate performs I/O; see `crowdfund-client` for RPC.

## Usage

```rust
use crowdfund_sdk::{Address, CampaignState, CampaignStatus};

let owner: Address = "0x1111111111111111111111111111111111111111".parse().unwrap();
let state = CampaignState {
    owner,
    goal: 10,
    deadline: 1_700_000_000,
    total_contributed: 10,
    time_left: 0,
    goal_reached: true,
    funds_withdrawn: false,
    user_contribution: 0,
};

let status = CampaignStatus::derive(state, Some(owner));
assert!(status.can_withdraw);
assert!(!status.can_get_refund);
```
*/

pub mod abi;
pub mod address;
pub mod campaign;
pub mod contract;
pub mod deploy;
pub mod routes;
pub mod units;

pub use abi::{AbiError, AbiResult, Token};
pub use address::{Address, AddressError};
pub use campaign::{
    format_deadline, format_time_left, CampaignPhase, CampaignState, CampaignStatus,
};
pub use contract::{
    build_contribute_call, build_deploy_data, build_refund_call, build_withdraw_call, ViewCall,
};
pub use deploy::{DeployInputError, DeployParams, MAX_DURATION_DAYS, MIN_DURATION_DAYS};
pub use routes::{Route, RouteError};
pub use units::{format_ether, parse_ether, parse_positive_ether, UnitsError, WEI_PER_ETHER};
