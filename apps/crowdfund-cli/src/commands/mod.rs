pub mod campaign;
pub mod campaign_action;
pub mod connect;
pub mod deploy;
pub mod landing;
pub mod open;
pub mod watch;

use crate::{config::CliConfig, error::CliResult};
use crowdfund_client::{crowdfund_sdk::Address, CrowdfundClient, HttpProvider};

/// Build the client for one command invocation
pub fn build_client(config: &CliConfig) -> CliResult<CrowdfundClient<HttpProvider>> {
    let mut client = CrowdfundClient::new(config.client_config())?;
    if let Some(from) = config.from {
        client.use_account(from);
    }
    Ok(client)
}

/// Use the configured account, or ask the wallet for one
pub async fn ensure_connected(client: &mut CrowdfundClient<HttpProvider>) -> CliResult<Address> {
    match client.account() {
        Some(account) => Ok(account),
        None => {
            println!("🔌 Connecting wallet...");
            Ok(client.connect().await?)
        }
    }
}
