use crate::{commands::build_client, config::CliConfig, error::CliResult, render};
use std::{ops::ControlFlow, time::Duration};
use tracing::warn;

/// Re-render the campaign on every refresh until Ctrl-C
pub async fn execute(config: &CliConfig, address: String, interval_secs: Option<u64>) -> CliResult<()> {
    let client = build_client(config)?;
    let mut view = client.campaign_view(address.clone());
    let interval = interval_secs
        .map(Duration::from_secs)
        .unwrap_or(client.config().poll_interval)
        .max(Duration::from_secs(1));
    let symbol = config.network.currency_symbol.clone();

    println!(
        "👀 Watching {} every {}s (Ctrl-C to stop)",
        address,
        interval.as_secs()
    );

    let watch = view.watch(interval, |state, error| {
        match error {
            Some(e) => warn!("refresh failed, showing last known state: {}", e),
            None => println!(),
        }
        render::render_view_state(&address, state, &symbol);
        ControlFlow::Continue(())
    });

    tokio::select! {
        _ = watch => {}
        result = tokio::signal::ctrl_c() => {
            result?;
            println!("\n👋 Stopped watching");
        }
    }
    Ok(())
}
