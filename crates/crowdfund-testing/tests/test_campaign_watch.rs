use {
    crowdfund_client::ViewState,
    crowdfund_testing::TestFixture,
    std::{ops::ControlFlow, time::Duration},
};

/// The refresh loop picks up chain changes until the callback breaks
#[tokio::test]
async fn test_watch_picks_up_chain_changes() {
    let test = TestFixture::new();
    let contract = test.deploy_campaign("10", "30").await.contract;
    let mut view = test.client(Some(test.backers[0])).campaign_view(contract.to_string());

    let chain = test.chain.clone();
    let mut seen = Vec::new();
    tokio::time::timeout(
        Duration::from_secs(5),
        view.watch(Duration::from_millis(10), |state, error| {
            assert!(error.is_none());
            if let ViewState::Ready(status) = state {
                seen.push(status.state.time_left);
            }
            chain.advance_time(86_400);
            if seen.len() == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }),
    )
    .await
    .expect("Watch should stop after three updates");

    assert_eq!(seen, vec![30 * 86_400, 29 * 86_400, 28 * 86_400]);
    println!("✅ Watch loop observed the clock advancing");
}

/// Read failures are reported to the callback without stopping the loop
#[tokio::test]
async fn test_watch_survives_read_failures() {
    let test = TestFixture::new();
    let contract = test.deploy_campaign("10", "30").await.contract;
    let mut view = test.client(None).campaign_view(contract.to_string());

    test.chain.fail_reads(true);
    let chain = test.chain.clone();
    let mut failures = 0;
    let mut loaded = false;
    tokio::time::timeout(
        Duration::from_secs(5),
        view.watch(Duration::from_millis(10), |state, error| {
            match (state, error) {
                (ViewState::Loading, Some(_)) => {
                    failures += 1;
                    if failures == 2 {
                        chain.fail_reads(false);
                    }
                    ControlFlow::Continue(())
                }
                (ViewState::Ready(_), None) => {
                    loaded = true;
                    ControlFlow::Break(())
                }
                _ => ControlFlow::Continue(()),
            }
        }),
    )
    .await
    .expect("Watch should recover and stop");

    assert_eq!(failures, 2);
    assert!(loaded);
    assert!(matches!(view.state(), ViewState::Ready(_)));
}
