use crate::{
    commands::{build_client, ensure_connected},
    config::CliConfig,
    error::CliResult,
    render,
};
use crowdfund_client::{ActionKind, CampaignView, HttpProvider, Submission};

/// Submit one campaign action, wait for confirmation and re-render.
///
/// `amount` is only used for contributions.
pub async fn execute(
    config: &CliConfig,
    address: String,
    kind: ActionKind,
    amount: Option<String>,
) -> CliResult<()> {
    let mut client = build_client(config)?;
    ensure_connected(&mut client).await?;

    let mut view = client.campaign_view(address);
    view.refresh().await?;

    let submission = match submit(&mut view, kind, amount.as_deref()).await {
        Ok(submission) => submission,
        Err(e) => {
            render::render_notice(&e.notice(kind));
            return Err(e.into());
        }
    };
    render::render_notice(&submission.notice);
    println!("⏳ Waiting for confirmation of {}...", submission.hash);

    let confirmed = view.confirm(&submission).await;
    match &confirmed {
        Ok(receipt) => println!(
            "✅ Confirmed in block {}",
            receipt
                .block_number
                .map(|block| block.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        ),
        Err(e) => render::render_notice(&e.notice(kind)),
    }

    println!();
    render::render_view_state(
        view.contract_input(),
        view.state(),
        &config.network.currency_symbol,
    );
    confirmed?;
    Ok(())
}

async fn submit(
    view: &mut CampaignView<HttpProvider>,
    kind: ActionKind,
    amount: Option<&str>,
) -> Result<Submission, crowdfund_client::ActionError> {
    match kind {
        ActionKind::Contribute => view.contribute(amount.unwrap_or_default()).await,
        ActionKind::Withdraw => view.withdraw().await,
        ActionKind::Refund => view.refund().await,
    }
}
