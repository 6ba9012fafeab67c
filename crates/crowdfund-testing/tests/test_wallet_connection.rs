use {
    crowdfund_client::{
        crowdfund_sdk::Address, ClientConfig, ClientError, CrowdfundClient,
    },
    crowdfund_testing::{MockChain, TestFixture, TEST_START_TIME},
    std::sync::Arc,
};

/// Connecting picks the wallet's first account on the configured network
#[tokio::test]
async fn test_connect_and_disconnect() {
    let test = TestFixture::new();
    let mut client = test.client(None);
    assert!(!client.wallet().is_connected());

    let account = client.connect().await.expect("Wallet should connect");
    assert_eq!(account, test.owner);
    assert_eq!(client.account(), Some(test.owner));
    assert_eq!(
        client.wallet().accounts().await.expect("Accounts should load").len(),
        4
    );

    client.disconnect();
    assert_eq!(client.account(), None);
    assert!(matches!(
        client.wallet().require_account(),
        Err(ClientError::WalletNotConnected)
    ));

    println!("✅ Wallet connected and disconnected");
}

/// A wallet on another chain is refused
#[tokio::test]
async fn test_connect_wrong_network() {
    let config = ClientConfig::default();
    let expected = config.network.chain_id;
    let chain = Arc::new(MockChain::new(1, TEST_START_TIME));
    chain.add_account(Address::new([0xa1; 20]), 0);

    let mut client = CrowdfundClient::with_providers(config, Arc::clone(&chain), chain);
    let result = client.connect().await;

    assert!(matches!(
        result,
        Err(ClientError::WrongNetwork { expected: e, actual: 1 }) if e == expected
    ));
    assert_eq!(client.account(), None);
}

/// A wallet exposing no accounts cannot connect
#[tokio::test]
async fn test_connect_without_accounts() {
    let config = ClientConfig::default();
    let chain = Arc::new(MockChain::new(config.network.chain_id, TEST_START_TIME));

    let mut client = CrowdfundClient::with_providers(config, Arc::clone(&chain), chain);
    assert!(matches!(client.connect().await, Err(ClientError::NoAccounts)));
    assert!(!client.wallet().is_connected());
}

/// Views opened before and after connecting see different callers
#[tokio::test]
async fn test_views_follow_connected_account() {
    let test = TestFixture::new();
    let contract = test.deploy_campaign("1", "30").await.contract;
    test.contribute(&contract, test.backers[0], "1").await;

    let mut client = test.client(None);
    let mut anonymous = client.campaign_view(contract.to_string());
    let status = anonymous.refresh().await.expect("Campaign should load");
    assert!(!status.can_withdraw);

    client.connect().await.expect("Wallet should connect");
    let mut owner_view = client.campaign_view(contract.to_string());
    let status = owner_view.refresh().await.expect("Campaign should load");
    assert_eq!(status.account, Some(test.owner));
    assert!(status.can_withdraw);
}
