//! Terminal rendering of campaign screens and notices.

use crowdfund_client::{
    crowdfund_sdk::{format_deadline, format_ether, format_time_left, CampaignStatus},
    Notice, ViewState,
};

pub fn render_notice(notice: &Notice) {
    if notice.is_error() {
        eprintln!("{}", notice);
    } else {
        println!("{}", notice);
    }
}

pub fn render_view_state(contract: &str, state: &ViewState, symbol: &str) {
    match state {
        ViewState::Loading => println!("⏳ Loading campaign {}...", contract),
        ViewState::Ready(status) => render_campaign(contract, status, symbol),
    }
}

pub fn render_campaign(contract: &str, status: &CampaignStatus, symbol: &str) {
    let state = &status.state;

    println!("📊 Campaign {}", contract);
    println!("   Status: {}", status.phase.label());
    println!("   Owner: {}", state.owner.short());
    println!(
        "   Raised: {} / {} {} ({:.1}%)",
        format_ether(state.total_contributed),
        format_ether(state.goal),
        symbol,
        status.progress_percentage
    );
    println!("   {}", progress_bar(status.progress_percentage, 30));
    if state.time_left > 0 {
        println!("   Time remaining: {}", format_time_left(state.time_left));
    } else {
        println!("   Time remaining: Campaign ended");
    }
    println!("   Deadline: {}", format_deadline(state.deadline));
    println!(
        "   Your contribution: {} {}",
        format_ether(state.user_contribution),
        symbol
    );

    println!();
    for line in action_lines(contract, status) {
        println!("{}", line);
    }
}

/// Contribute and action hints for the caller the status was derived for.
fn action_lines(contract: &str, status: &CampaignStatus) -> Vec<String> {
    let Some(account) = status.account else {
        return vec!["🔌 Connect your wallet to contribute or manage funds".to_string()];
    };

    let mut lines = vec![format!("👤 Connected as {}", account.short())];
    if status.is_campaign_active {
        lines.push(format!("   💸 crowdfund contribute {} <amount>", contract));
    }
    if status.can_withdraw {
        lines.push("   🏦 As the campaign owner, you can withdraw the funds now:".to_string());
        lines.push(format!("      crowdfund withdraw {}", contract));
    }
    if status.can_get_refund {
        lines.push("   ↩️  The goal was not reached, you can get a refund:".to_string());
        lines.push(format!("      crowdfund refund {}", contract));
    }
    if status.has_no_actions() {
        lines.push("   No actions available".to_string());
    }
    lines
}

/// Fixed-width bar; overfunded campaigns render full.
fn progress_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
