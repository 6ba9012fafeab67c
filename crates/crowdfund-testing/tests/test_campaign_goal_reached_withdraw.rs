use {
    crowdfund_client::{
        crowdfund_sdk::{CampaignPhase, WEI_PER_ETHER},
        ActionError, ActionKind, ActionStatus, ClientError,
    },
    crowdfund_testing::{TestFixture, TEST_ACCOUNT_BALANCE},
};

/// Test withdrawal once the goal is met and the deadline has passed
///
/// **Test flow:**
/// 1. Deploy a 10 ether, 30 day campaign and fund it fully
/// 2. Move past the deadline (goal 10, total 10, time left 0)
/// 3. Verify only the owner sees withdraw and nobody sees refund
/// 4. Withdraw as owner and verify the re-read state
#[tokio::test]
async fn test_campaign_goal_reached_withdraw() {
    let test = TestFixture::new();

    // 1. Deploy and fund
    let deployment = test.deploy_campaign("10", "30").await;
    let contract = deployment.contract;
    test.contribute(&contract, test.backers[0], "10").await;

    // 2. Past the deadline
    test.advance_days(31);

    // 3. Flags per caller
    let backer_view = test.open_campaign(&contract, Some(test.backers[0])).await;
    let backer_status = backer_view.status().expect("Campaign should be loaded");
    assert_eq!(backer_status.state.goal, 10 * WEI_PER_ETHER);
    assert_eq!(backer_status.state.total_contributed, 10 * WEI_PER_ETHER);
    assert_eq!(backer_status.state.time_left, 0);
    assert!(backer_status.state.goal_reached);
    assert_eq!(backer_status.progress_percentage, 100.0);
    assert!(!backer_status.is_campaign_active);
    assert!(!backer_status.can_get_refund);
    assert!(!backer_status.can_withdraw);
    assert!(backer_status.has_no_actions());
    assert_eq!(backer_status.phase, CampaignPhase::GoalReached);

    let mut owner_view = test.open_campaign(&contract, Some(test.owner)).await;
    let owner_status = owner_view.status().expect("Campaign should be loaded");
    assert!(owner_status.can_withdraw);
    assert!(!owner_status.can_get_refund);

    // 4. Withdraw as owner
    let submission = owner_view.withdraw().await.expect("Withdraw should submit");
    assert_eq!(submission.kind, ActionKind::Withdraw);
    assert!(!submission.notice.is_error());
    assert_eq!(
        owner_view.action_status(ActionKind::Withdraw),
        ActionStatus::Confirming
    );

    owner_view
        .confirm(&submission)
        .await
        .expect("Withdraw should be confirmed");
    assert_eq!(owner_view.action_status(ActionKind::Withdraw), ActionStatus::Idle);

    let refreshed = owner_view.status().expect("Campaign should be loaded");
    assert!(refreshed.state.funds_withdrawn);
    assert!(!refreshed.can_withdraw);
    assert_eq!(
        test.chain.balance(&test.owner),
        TEST_ACCOUNT_BALANCE + 10 * WEI_PER_ETHER
    );

    println!("✅ Owner withdrew funds of a successful campaign");

    // The client no longer offers withdraw
    let result = owner_view.withdraw().await;
    assert!(matches!(result, Err(ActionError::WithdrawUnavailable)));
}

/// Test that a second withdrawal from a stale view is rejected by the contract
///
/// Two owner views load the same state. The first withdraws; the second still
/// shows withdraw as available, submits, and the transaction reverts.
#[tokio::test]
async fn test_second_withdrawal_rejected_by_contract() {
    let test = TestFixture::new();
    let contract = test.deploy_campaign("5", "10").await.contract;
    test.contribute(&contract, test.backers[1], "5").await;

    let mut first = test.open_campaign(&contract, Some(test.owner)).await;
    let mut stale = test.open_campaign(&contract, Some(test.owner)).await;

    let submission = first.withdraw().await.expect("Withdraw should submit");
    first
        .confirm(&submission)
        .await
        .expect("First withdraw should be confirmed");

    assert!(stale.status().expect("Campaign should be loaded").can_withdraw);
    let submission = stale
        .withdraw()
        .await
        .expect("Stale view still submits the withdraw");
    let result = stale.confirm(&submission).await;
    assert!(matches!(
        result,
        Err(ActionError::Confirmation(ClientError::Reverted(hash))) if hash == submission.hash
    ));

    // The failed confirmation still re-reads the chain
    let status = stale.status().expect("Campaign should be loaded");
    assert!(status.state.funds_withdrawn);
    assert!(!status.can_withdraw);
    assert_eq!(
        test.chain.balance(&test.owner),
        TEST_ACCOUNT_BALANCE + 5 * WEI_PER_ETHER
    );

    println!("✅ Second withdrawal reverted on chain");
}

/// Withdraw is never offered to a non-owner, even after the goal is met
#[tokio::test]
async fn test_non_owner_cannot_withdraw() {
    let test = TestFixture::new();
    let contract = test.deploy_campaign("1", "1").await.contract;
    test.contribute(&contract, test.backers[0], "1").await;

    let mut view = test.open_campaign(&contract, Some(test.backers[0])).await;
    let sent = test.chain.sent_transaction_count();

    let result = view.withdraw().await;
    assert!(matches!(result, Err(ActionError::WithdrawUnavailable)));
    assert_eq!(test.chain.sent_transaction_count(), sent);
}
