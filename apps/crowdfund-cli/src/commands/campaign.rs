use crate::{commands::build_client, config::CliConfig, error::CliResult, render};
use crowdfund_client::{crowdfund_sdk::CampaignStatus, CrowdfundClient, Provider};

/// One-shot campaign screen
pub async fn execute(config: &CliConfig, address: String) -> CliResult<()> {
    let client = build_client(config)?;
    show(&client, address, &config.network.currency_symbol).await?;
    Ok(())
}

/// Load and render a campaign as the client's current account
pub async fn show<P: Provider>(
    client: &CrowdfundClient<P>,
    address: String,
    symbol: &str,
) -> CliResult<CampaignStatus> {
    let mut view = client.campaign_view(address);

    match view.refresh().await {
        Ok(status) => {
            render::render_campaign(view.contract_input(), &status, symbol);
            Ok(status)
        }
        Err(e) => {
            eprintln!("❌ Could not load campaign {}: {}", view.contract_input(), e);
            Err(e.into())
        }
    }
}
