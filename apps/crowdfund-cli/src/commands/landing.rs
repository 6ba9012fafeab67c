use crate::{commands::campaign, config::CliConfig, error::CliResult};
use crowdfund_client::crowdfund_sdk::Route;
use std::io::{self, BufRead, Write};

pub async fn execute(config: &CliConfig) -> CliResult<()> {
    println!("🚀 Decentralized Crowdfunding on the Blockchain");
    println!("   Network: {}", config.network.name);
    println!();
    println!("   Start a campaign:  crowdfund deploy --goal <amount> --duration-days <days> --bytecode <file>");
    println!("   View a campaign:   enter its contract address below");
    println!();
    print!("Enter campaign contract address: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    match Route::from_landing_input(&input) {
        Some(Route::Campaign(address)) => {
            println!("➡️  /campaign/{}", address);
            campaign::execute(config, address).await
        }
        _ => {
            println!("No address entered");
            Ok(())
        }
    }
}
