use crate::{
    commands::{build_client, campaign, ensure_connected},
    config::CliConfig,
    error::CliResult,
    render,
};
use crowdfund_client::{
    crowdfund_sdk::{abi::from_hex_data, CampaignStatus, MAX_DURATION_DAYS, MIN_DURATION_DAYS},
    CrowdfundClient, Provider,
};
use std::{fs, path::Path};

pub async fn execute(
    config: &CliConfig,
    goal: String,
    duration_days: String,
    bytecode_path: &Path,
) -> CliResult<()> {
    let bytecode = read_bytecode(bytecode_path)?;

    let mut client = build_client(config)?;
    ensure_connected(&mut client).await?;

    println!("🚀 Deploying campaign...");
    println!("   Goal: {} {}", goal.trim(), config.network.currency_symbol);
    println!(
        "   Duration: {} days (allowed {}-{})",
        duration_days.trim(),
        MIN_DURATION_DAYS,
        MAX_DURATION_DAYS
    );

    deploy_and_open(&client, &bytecode, &goal, &duration_days, &config.network.currency_symbol)
        .await?;
    Ok(())
}

/// Deploy, then navigate to the new campaign with the same wallet account.
pub async fn deploy_and_open<P: Provider>(
    client: &CrowdfundClient<P>,
    bytecode: &[u8],
    goal: &str,
    duration_days: &str,
    symbol: &str,
) -> CliResult<CampaignStatus> {
    let mut deployer = client.deployer();
    let deployment = match deployer.deploy(bytecode, goal, duration_days).await {
        Ok(deployment) => deployment,
        Err(e) => {
            render::render_notice(&e.notice());
            return Err(e.into());
        }
    };

    render::render_notice(&deployment.notice);
    println!("   Transaction: {}", deployment.hash);
    println!("➡️  {}", deployment.route());
    println!();

    campaign::show(client, deployment.contract.to_string(), symbol).await
}

/// Creation bytecode from a file holding either hex text (as emitted by
/// compilers, with or without `0x`) or raw bytes.
fn read_bytecode(path: &Path) -> CliResult<Vec<u8>> {
    let raw = fs::read(path)?;
    match std::str::from_utf8(&raw) {
        Ok(text) if !text.trim().is_empty() => match from_hex_data(text.trim()) {
            Ok(bytes) => Ok(bytes),
            Err(_) => Ok(raw),
        },
        _ => Ok(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use crowdfund_testing::{TestFixture, MOCK_BYTECODE, TEST_START_TIME};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_deploy_opens_new_campaign_as_owner() {
        let test = TestFixture::new();
        let client = test.client(Some(test.owner));

        let status = deploy_and_open(&client, MOCK_BYTECODE, "10", "30", "WND")
            .await
            .unwrap();

        assert_eq!(status.account, Some(test.owner));
        assert_eq!(status.state.owner, test.owner);
        assert_eq!(status.state.deadline, TEST_START_TIME + 2_592_000);
        assert!(status.is_campaign_active);
    }

    #[tokio::test]
    async fn test_failed_deploy_does_not_navigate() {
        let test = TestFixture::new();
        let client = test.client(Some(test.owner));

        let result = deploy_and_open(&client, MOCK_BYTECODE, "", "30", "WND").await;
        assert!(matches!(result, Err(CliError::Deploy(_))));
        assert_eq!(test.chain.sent_transaction_count(), 0);
    }

    #[test]
    fn test_read_hex_bytecode() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0x6080604052").unwrap();
        assert_eq!(
            read_bytecode(file.path()).unwrap(),
            vec![0x60, 0x80, 0x60, 0x40, 0x52]
        );
    }

    #[test]
    fn test_read_bare_hex_bytecode() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "6080604052").unwrap();
        assert_eq!(read_bytecode(file.path()).unwrap().len(), 5);
    }

    #[test]
    fn test_read_binary_bytecode() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x60, 0x80, 0xff, 0x00]).unwrap();
        assert_eq!(
            read_bytecode(file.path()).unwrap(),
            vec![0x60, 0x80, 0xff, 0x00]
        );
    }
}
