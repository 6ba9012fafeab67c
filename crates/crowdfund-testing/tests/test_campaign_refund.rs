use {
    crowdfund_client::{
        crowdfund_sdk::{CampaignPhase, WEI_PER_ETHER},
        ActionError, ActionKind,
    },
    crowdfund_testing::{TestFixture, TEST_ACCOUNT_BALANCE},
};

/// Test refund of a campaign that missed its goal
///
/// **Test flow:**
/// 1. Deploy a 10 ether campaign, backer contributes 4
/// 2. Move past the deadline (goal 10, total 4, time left 0)
/// 3. Verify the backer sees refund and the owner sees nothing
/// 4. Refund and verify the contribution is returned
#[tokio::test]
async fn test_campaign_refund_after_failed_goal() {
    let test = TestFixture::new();
    let backer = test.backers[0];

    // 1. Deploy and partially fund
    let contract = test.deploy_campaign("10", "30").await.contract;
    test.contribute(&contract, backer, "4").await;
    assert_eq!(
        test.chain.balance(&backer),
        TEST_ACCOUNT_BALANCE - 4 * WEI_PER_ETHER
    );

    // 2. Past the deadline
    test.advance_days(30);

    // 3. Flags per caller
    let mut view = test.open_campaign(&contract, Some(backer)).await;
    let status = view.status().expect("Campaign should be loaded");
    assert_eq!(status.state.time_left, 0);
    assert!(!status.state.goal_reached);
    assert_eq!(status.state.user_contribution, 4 * WEI_PER_ETHER);
    assert_eq!(status.progress_percentage, 40.0);
    assert!(status.can_get_refund);
    assert!(!status.can_withdraw);
    assert!(!status.is_campaign_active);
    assert_eq!(status.phase, CampaignPhase::Ended);

    let owner_view = test.open_campaign(&contract, Some(test.owner)).await;
    let owner_status = owner_view.status().expect("Campaign should be loaded");
    assert!(!owner_status.can_withdraw);
    assert!(!owner_status.can_get_refund);
    assert!(owner_status.has_no_actions());

    // 4. Refund
    let submission = view.refund().await.expect("Refund should submit");
    assert_eq!(submission.kind, ActionKind::Refund);
    assert_eq!(submission.notice.title, "Refund requested");
    view.confirm(&submission)
        .await
        .expect("Refund should be confirmed");

    let status = view.status().expect("Campaign should be loaded");
    assert_eq!(status.state.user_contribution, 0);
    assert!(!status.can_get_refund);
    assert_eq!(test.chain.balance(&backer), TEST_ACCOUNT_BALANCE);

    println!("✅ Backer refunded after the campaign missed its goal");

    // Nothing left to refund
    assert!(matches!(
        view.refund().await,
        Err(ActionError::RefundUnavailable)
    ));
}

/// Refund is not offered while the campaign is still running
#[tokio::test]
async fn test_refund_unavailable_before_deadline() {
    let test = TestFixture::new();
    let backer = test.backers[2];
    let contract = test.deploy_campaign("10", "30").await.contract;
    test.contribute(&contract, backer, "2.5").await;

    let mut view = test.open_campaign(&contract, Some(backer)).await;
    let status = view.status().expect("Campaign should be loaded");
    assert!(status.is_campaign_active);
    assert!(!status.can_get_refund);
    assert_eq!(status.state.user_contribution, 2_500_000_000_000_000_000);

    let sent = test.chain.sent_transaction_count();
    assert!(matches!(
        view.refund().await,
        Err(ActionError::RefundUnavailable)
    ));
    assert_eq!(test.chain.sent_transaction_count(), sent);
}

/// A caller who never contributed gets no refund option
#[tokio::test]
async fn test_refund_unavailable_without_contribution() {
    let test = TestFixture::new();
    let contract = test.deploy_campaign("10", "1").await.contract;
    test.contribute(&contract, test.backers[0], "1").await;
    test.advance_days(2);

    let view = test.open_campaign(&contract, Some(test.backers[1])).await;
    let status = view.status().expect("Campaign should be loaded");
    assert_eq!(status.state.user_contribution, 0);
    assert!(!status.can_get_refund);
    assert!(status.has_no_actions());
}
