use crate::{
    commands::{campaign, landing},
    config::CliConfig,
    error::CliResult,
};
use crowdfund_client::crowdfund_sdk::{Route, MAX_DURATION_DAYS, MIN_DURATION_DAYS};

/// Navigate to a path: `/`, `/deploy` or `/campaign/{address}`
pub async fn execute(config: &CliConfig, path: &str) -> CliResult<()> {
    let route: Route = path.parse()?;

    match route {
        Route::Landing => landing::execute(config).await,
        Route::Deploy => {
            println!("🚀 Deploy a new crowdfunding campaign");
            println!("   Funding goal in {}", config.network.currency_symbol);
            println!(
                "   Duration in days ({}-{})",
                MIN_DURATION_DAYS, MAX_DURATION_DAYS
            );
            println!();
            println!("   crowdfund deploy --goal <amount> --duration-days <days> --bytecode <file>");
            Ok(())
        }
        Route::Campaign(address) => campaign::execute(config, address).await,
    }
}
