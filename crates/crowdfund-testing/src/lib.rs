mod mock_chain;
mod test_fixture;

pub use {
    mock_chain::{MockCampaign, MockChain, USER_REJECTED_CODE},
    test_fixture::{TestFixture, MOCK_BYTECODE, TEST_ACCOUNT_BALANCE, TEST_START_TIME},
};
