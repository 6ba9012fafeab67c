use clap::{Parser, Subcommand};
use crowdfund_client::{crowdfund_sdk::Address, ActionKind};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod render;

use config::CliConfig;
use error::CliResult;

#[derive(Parser)]
#[command(name = "crowdfund")]
#[command(about = "Crowdfund CLI - Deploy, fund and manage crowdfunding campaign contracts")]
#[command(version)]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON-RPC endpoint, overrides the configured network URL
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Act as this account instead of asking the wallet
    #[arg(long, global = true)]
    from: Option<Address>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Landing page: enter a campaign address to open it
    Landing,

    /// Navigate to a route (/, /deploy, /campaign/<address>)
    Open {
        route: String,
    },

    /// Deploy a new campaign contract
    Deploy {
        /// Funding goal in the network's native token
        #[arg(long)]
        goal: String,

        /// Campaign duration in days
        #[arg(long)]
        duration_days: String,

        /// File with the contract creation bytecode (hex or binary)
        #[arg(long)]
        bytecode: PathBuf,
    },

    /// Show a campaign once
    Campaign {
        address: String,
    },

    /// Keep a campaign on screen, refreshing on an interval
    Watch {
        address: String,

        /// Seconds between refreshes (defaults to the configured poll interval)
        #[arg(long)]
        interval_secs: Option<u64>,
    },

    /// Contribute to an active campaign
    Contribute {
        address: String,

        /// Amount in the network's native token, e.g. 0.5
        amount: String,
    },

    /// Withdraw the funds of a successful campaign (owner only)
    Withdraw {
        address: String,
    },

    /// Get your contribution back from a failed campaign
    Refund {
        address: String,
    },

    /// Connect the wallet and show the account
    Connect,
}

#[tokio::main]
async fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?.with_overrides(cli.rpc_url, cli.from);

    match cli.command {
        Commands::Landing => commands::landing::execute(&config).await,

        Commands::Open { route } => commands::open::execute(&config, &route).await,

        Commands::Deploy {
            goal,
            duration_days,
            bytecode,
        } => commands::deploy::execute(&config, goal, duration_days, &bytecode).await,

        Commands::Campaign { address } => commands::campaign::execute(&config, address).await,

        Commands::Watch {
            address,
            interval_secs,
        } => commands::watch::execute(&config, address, interval_secs).await,

        Commands::Contribute { address, amount } => {
            commands::campaign_action::execute(
                &config,
                address,
                ActionKind::Contribute,
                Some(amount),
            )
            .await
        }

        Commands::Withdraw { address } => {
            commands::campaign_action::execute(&config, address, ActionKind::Withdraw, None).await
        }

        Commands::Refund { address } => {
            commands::campaign_action::execute(&config, address, ActionKind::Refund, None).await
        }

        Commands::Connect => commands::connect::execute(&config).await,
    }
}
