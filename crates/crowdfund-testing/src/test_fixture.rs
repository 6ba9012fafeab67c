use {
    crate::mock_chain::MockChain,
    crowdfund_client::{
        crowdfund_sdk::{Address, WEI_PER_ETHER},
        CampaignView, ClientConfig, ConfirmationConfig, CrowdfundClient, Deployment,
    },
    std::{sync::Arc, time::Duration},
};

/// Balance every test account starts with (100 ether)
pub const TEST_ACCOUNT_BALANCE: u128 = 100 * WEI_PER_ETHER;

/// Chain clock at fixture creation
pub const TEST_START_TIME: u64 = 1_700_000_000;

/// Stand-in creation code; the mock chain only reads the trailing constructor arguments
pub const MOCK_BYTECODE: &[u8] = &[0x60, 0x80, 0x60, 0x40, 0x52];

/// Test fixture containing common test setup
pub struct TestFixture {
    pub chain: Arc<MockChain>,
    pub config: ClientConfig,
    pub owner: Address,
    pub backers: Vec<Address>,
}

impl TestFixture {
    /// A chain on the configured network with one owner and three funded backers
    pub fn new() -> Self {
        let mut config = ClientConfig::default();
        config.confirmation = ConfirmationConfig::with_timeout(Duration::from_secs(2));

        let chain = Arc::new(MockChain::new(config.network.chain_id, TEST_START_TIME));
        let owner = test_account(1);
        let backers: Vec<Address> = (2..=4).map(test_account).collect();

        chain.add_account(owner, TEST_ACCOUNT_BALANCE);
        for backer in &backers {
            chain.add_account(*backer, TEST_ACCOUNT_BALANCE);
        }

        Self {
            chain,
            config,
            owner,
            backers,
        }
    }

    /// A client backed by the mock chain, acting as `account` when given
    pub fn client(&self, account: Option<Address>) -> CrowdfundClient<MockChain> {
        let mut client = CrowdfundClient::with_providers(
            self.config.clone(),
            Arc::clone(&self.chain),
            Arc::clone(&self.chain),
        );
        if let Some(account) = account {
            client.use_account(account);
        }
        client
    }

    /// Deploy a campaign as the owner and return the mined deployment
    pub async fn deploy_campaign(&self, goal: &str, duration_days: &str) -> Deployment {
        self.client(Some(self.owner))
            .deployer()
            .deploy(MOCK_BYTECODE, goal, duration_days)
            .await
            .expect("Failed to deploy campaign")
    }

    /// Open the campaign screen as `account` and load its state
    pub async fn open_campaign(
        &self,
        contract: &Address,
        account: Option<Address>,
    ) -> CampaignView<MockChain> {
        let mut view = self.client(account).campaign_view(contract.to_string());
        view.refresh().await.expect("Failed to load campaign");
        view
    }

    /// Contribute `amount` ether from `backer` and wait for confirmation
    pub async fn contribute(&self, contract: &Address, backer: Address, amount: &str) {
        let mut view = self.open_campaign(contract, Some(backer)).await;
        let submission = view
            .contribute(amount)
            .await
            .expect("Failed to submit contribution");
        view.confirm(&submission)
            .await
            .expect("Contribution was not confirmed");
    }

    pub fn advance_days(&self, days: u64) {
        self.chain.advance_time(days * 86_400);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn test_account(seed: u8) -> Address {
    let mut bytes = [0u8; 20];
    bytes[0] = 0xa0;
    bytes[19] = seed;
    Address::new(bytes)
}
