/*!
# Crowdfund Client

Wallet connection, contract reads and transaction lifecycle for crowdfunding
campaign contracts.

## Purpose

The campaign contract enforces every rule (goal math, deadlines, refunds,
withdrawal permission). This crate only:

- **Connects a wallet**: one injected connector on one configured network
- **Reads state**: the eight campaign fields, concurrently, refreshed on demand or on an interval
- **Submits transactions**: contribute, withdraw, refund and deploy, each a single submission
- **Reports progress**: per-action status and user-facing [`Notice`]s

## Architecture

Every chain interaction goes through the [`Provider`] trait (an EIP-1193 style
`request`). [`HttpProvider`] is the JSON-RPC implementation; the testing crate
provides an in-memory chain.

## Usage

```rust,no_run
use crowdfund_client::{ClientConfig, ClientResult, CrowdfundClient};

# async fn example() -> ClientResult<()> {
let mut client = CrowdfundClient::new(ClientConfig::default())?;
client.connect().await?;

let mut view = client.campaign_view("0x5FbDB2315678afecb367f032d93F642f64180aa3");
let status = view.refresh().await?;
println!("{:.1}% funded", status.progress_percentage);
# Ok(())
# }
```
*/

pub mod campaign_view;
pub mod client;
pub mod config;
pub mod deploy_view;
pub mod errors;
pub mod feedback;
pub mod provider;
pub mod reader;
pub mod transactions;
pub mod types;
pub mod wallet;

pub use campaign_view::{
    ActionError, ActionKind, ActionStatus, CampaignView, Submission, ViewState,
};
pub use client::CrowdfundClient;
pub use config::{ClientConfig, ConfirmationConfig, ConnectorConfig, ConnectorKind, NetworkConfig};
pub use deploy_view::{DeployError, Deployer, Deployment};
pub use errors::{ClientError, ClientResult};
pub use feedback::{Notice, NoticeVariant};
pub use provider::{HttpProvider, Provider};
pub use reader::CampaignReader;
pub use transactions::TransactionSender;
pub use types::{TransactionReceipt, TransactionRequest, TxHash};
pub use wallet::Wallet;

// Re-export the SDK so callers need only one dependency
pub use crowdfund_sdk;
