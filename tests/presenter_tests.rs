mod common;

use common::{presenter, sample};
use mfuko::services::{ProgressTone, TipFilter};
use mfuko::domain::TipCategory;

#[test]
fn budget_screen_for_sample() {
    let snapshot = sample();
    let screen = presenter().budget_screen(&snapshot.budget);

    assert_eq!(screen.overview.month_label, "March 2025");
    assert_eq!(screen.overview.remaining, "TZS 148,000");
    assert!(!screen.overview.remaining_is_negative);
    assert_eq!(screen.overview.used_label, "59% Used");
    assert_eq!(screen.overview.spent_of_total, "TZS 212,000 of TZS 360,000");
    assert_eq!(screen.overview.tone, ProgressTone::Normal);

    let first = &screen.categories[0];
    assert_eq!(first.name, "Accommodation");
    assert_eq!(first.status, "Within Budget");
    assert_eq!(first.percent, "80%");
    assert_eq!(first.tone, ProgressTone::Warning);
    assert_eq!(first.color.as_deref(), Some("#673AB7"));

    let labels: Vec<&str> = screen.categories.iter().map(|card| card.percent.as_str()).collect();
    assert_eq!(labels, vec!["80%", "63%", "63%", "50%", "30%", "23%"]);
}

#[test]
fn savings_cards_count_down_to_deadlines() {
    let snapshot = sample();
    let screen = presenter().savings_screen(&snapshot.savings_goals);
    assert!(screen.empty_message.is_none());
    assert_eq!(screen.total_saved, "TZS 340,000");

    let laptop = &screen.goals[0];
    assert_eq!(laptop.current, "TZS 250,000");
    assert_eq!(laptop.target, "TZS 800,000");
    assert_eq!(laptop.remaining, "TZS 550,000");
    assert_eq!(laptop.percent, "31%");
    assert_eq!(laptop.deadline.as_deref(), Some("Aug 1, 2025"));
    assert_eq!(laptop.days_left.as_deref(), Some("134 days left"));

    let days: Vec<Option<&str>> = screen.goals.iter().map(|goal| goal.days_left.as_deref()).collect();
    assert_eq!(
        days,
        vec![Some("134 days left"), Some("56 days left"), Some("102 days left")]
    );
}

#[test]
fn dashboard_view_for_sample() {
    let snapshot = sample();
    let view = presenter().dashboard(&snapshot);

    assert_eq!(view.greeting, "Hello, Sophia");
    assert_eq!(view.balance.balance, "TZS 247,000");
    assert_eq!(view.balance.income, "+TZS 400,000");
    assert_eq!(view.balance.expenses, "-TZS 153,000");
    assert_eq!(view.budget.percent, "59%");

    let amounts: Vec<&str> = view
        .recent_transactions
        .iter()
        .map(|row| row.amount.as_str())
        .collect();
    assert_eq!(amounts, vec!["+TZS 350,000", "+TZS 50,000", "-TZS 5,000"]);
    assert_eq!(view.recent_transactions[0].date, "Mar 15, 2025");

    assert_eq!(view.top_goal.map(|goal| goal.name), Some("New Laptop".to_string()));
    assert_eq!(
        view.featured_tip.map(|tip| tip.title),
        Some("Track Every Expense".to_string())
    );
}

#[test]
fn tips_screen_marks_selected_filter() {
    let snapshot = sample();
    let screen = presenter().tips_screen(&snapshot.tips, TipFilter::Category(TipCategory::Saving));
    assert_eq!(screen.count_label, "2 tips available");
    assert_eq!(screen.tips.len(), 2);
    let selected: Vec<&str> = screen
        .filters
        .iter()
        .filter(|chip| chip.selected)
        .map(|chip| chip.label.as_str())
        .collect();
    assert_eq!(selected, vec!["Saving"]);

    let all = presenter().tips_screen(&snapshot.tips, TipFilter::All);
    assert_eq!(all.count_label, "5 tips available");
    assert_eq!(all.filters[0].label, "All");
    assert!(all.filters[0].selected);
}

#[test]
fn premium_plan_offers_upgrade() {
    let snapshot = sample();
    let premium = snapshot.plan("premium").expect("premium plan");
    let card = presenter().plan_card(premium);
    assert_eq!(card.name, "Premium");
    assert_eq!(card.price, "TZS 2,500/month");
    assert_eq!(card.upgrade_label.as_deref(), Some("Upgrade for TZS 2,500/month"));
    assert!(card.is_popular);
}

#[test]
fn views_serialize_for_the_ui() {
    let snapshot = sample();
    let view = presenter().dashboard(&snapshot);
    let json = serde_json::to_value(&view).expect("serialize dashboard");
    assert_eq!(json["balance"]["balance"], "TZS 247,000");
    assert_eq!(json["budget"]["tone"], "normal");
}
