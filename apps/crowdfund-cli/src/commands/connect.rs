use crate::{commands::build_client, config::CliConfig, error::CliResult};

pub async fn execute(config: &CliConfig) -> CliResult<()> {
    let mut client = build_client(config)?;

    println!("🔌 Connecting to {}...", config.network.name);
    let account = client.connect().await?;

    println!("✅ Connected: {}", account.short());
    println!("   Account: {}", account);
    println!(
        "   Network: {} (chain {})",
        config.network.name, config.network.chain_id
    );
    Ok(())
}
