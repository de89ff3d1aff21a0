//! Display-ready view models built from a [`FinanceSnapshot`].

mod views;

pub use views::*;

use mfuko_core::{
    clamp_progress, progress_tone, BudgetService, Clock, CurrencyFormatter, DateFormatter,
    SavingsService, SummaryService, SystemClock, TipFilter, TipService, TransactionService,
};
use mfuko_domain::{
    Budget, BudgetCategory, FinanceSnapshot, FinancialTip, SavingsGoal, SubscriptionPlan,
    Transaction,
};

use crate::format::{days_left_label, format_percentage, DisplayFormatter};
use crate::Result;

pub const EMPTY_SAVINGS_MESSAGE: &str =
    "You don't have any savings goals yet. Create your first goal to start saving!";

/// Turns snapshots into the strings the screens show.
#[derive(Debug, Clone)]
pub struct Presenter<C = SystemClock> {
    formatter: DisplayFormatter,
    clock: C,
}

impl Default for Presenter<SystemClock> {
    fn default() -> Self {
        Self::new(DisplayFormatter::default(), SystemClock)
    }
}

impl<C: Clock> Presenter<C> {
    pub fn new(formatter: DisplayFormatter, clock: C) -> Self {
        Self { formatter, clock }
    }

    pub fn formatter(&self) -> &DisplayFormatter {
        &self.formatter
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn money(&self, amount: f64) -> String {
        self.formatter.format_amount(amount)
    }

    fn amount_of(&self, part: f64, total: f64) -> String {
        format!("{} of {}", self.money(part), self.money(total))
    }

    pub fn budget_overview(&self, budget: &Budget) -> BudgetOverview {
        let summary = BudgetService::summarize(budget);
        let period = budget.period_start().unwrap_or_else(|| self.clock.today());
        BudgetOverview {
            month_label: self.formatter.format_month_year(period),
            remaining: self.money(summary.remaining),
            remaining_is_negative: summary.remaining < 0.0,
            used_label: format!(
                "{} Used",
                format_percentage(summary.total_spent, summary.total_budget)
            ),
            spent_of_total: self.amount_of(summary.total_spent, summary.total_budget),
            progress: clamp_progress(summary.progress),
            tone: progress_tone(summary.progress, true),
        }
    }

    pub fn category_card(&self, category: &BudgetCategory) -> CategoryCard {
        let progress = BudgetService::category_progress(category);
        let over_budget = BudgetService::is_over_budget(category);
        CategoryCard {
            id: category.id.clone(),
            name: category.name.label(),
            status: if over_budget { "Over Budget" } else { "Within Budget" }.into(),
            over_budget,
            spent: self.money(category.spent),
            amount: self.money(category.amount),
            percent: format_percentage(category.spent, category.amount),
            progress: clamp_progress(progress),
            tone: progress_tone(progress, true),
            color: category.color.clone(),
        }
    }

    /// Budget screen with categories ordered from most to least used.
    pub fn budget_screen(&self, budget: &Budget) -> BudgetScreen {
        BudgetScreen {
            overview: self.budget_overview(budget),
            categories: BudgetService::categories_by_utilization(budget)
                .into_iter()
                .map(|category| self.category_card(category))
                .collect(),
        }
    }

    pub fn savings_goal_card(&self, goal: &SavingsGoal) -> SavingsGoalCard {
        let progress = SavingsService::progress(goal);
        SavingsGoalCard {
            id: goal.id.clone(),
            name: goal.name.clone(),
            current: self.money(goal.current_amount),
            target: self.money(goal.target_amount),
            remaining: self.money(SavingsService::remaining(goal)),
            percent: format_percentage(goal.current_amount, goal.target_amount),
            progress: clamp_progress(progress),
            completed: SavingsService::is_complete(goal),
            deadline: goal.deadline.map(|date| self.formatter.format_date(date)),
            days_left: goal
                .deadline
                .map(|date| days_left_label(date, self.clock.now())),
            color: goal.color.clone(),
        }
    }

    pub fn savings_screen(&self, goals: &[SavingsGoal]) -> SavingsScreen {
        let summary = SavingsService::summarize(goals);
        SavingsScreen {
            total_saved: self.money(summary.total_saved),
            total_target: self.money(summary.total_target),
            goals: goals.iter().map(|goal| self.savings_goal_card(goal)).collect(),
            empty_message: goals.is_empty().then(|| EMPTY_SAVINGS_MESSAGE.to_string()),
        }
    }

    pub fn transaction_row(&self, transaction: &Transaction) -> TransactionRow {
        let sign = if transaction.is_income() { '+' } else { '-' };
        TransactionRow {
            id: transaction.id.clone(),
            description: transaction.description.clone(),
            category: transaction.category.label(),
            date: self.formatter.format_date(transaction.date),
            amount: format!("{sign}{}", self.money(transaction.amount)),
            is_income: transaction.is_income(),
        }
    }

    pub fn balance_card(&self, transactions: &[Transaction]) -> BalanceCard {
        let cash_flow = TransactionService::summarize(transactions);
        BalanceCard {
            balance: self.money(cash_flow.balance),
            income: format!("+{}", self.money(cash_flow.income)),
            expenses: format!("-{}", self.money(cash_flow.expenses)),
        }
    }

    pub fn tip_card(&self, tip: &FinancialTip) -> TipCard {
        TipCard {
            id: tip.id.clone(),
            title: tip.title.clone(),
            content: tip.content.clone(),
            category: tip.category.label(),
            date: self.formatter.format_date(tip.date_added),
            is_read: tip.is_read,
        }
    }

    pub fn tips_screen(&self, tips: &[FinancialTip], selected: TipFilter) -> TipsScreen {
        let visible = TipService::filter(tips, selected);
        TipsScreen {
            filters: TipService::filters(tips)
                .into_iter()
                .map(|filter| FilterChip {
                    value: filter.to_string(),
                    label: filter.label(),
                    selected: filter == selected,
                })
                .collect(),
            count_label: TipService::count_label(visible.len()),
            tips: visible.into_iter().map(|tip| self.tip_card(tip)).collect(),
        }
    }

    /// Tips screen for a filter tag such as `all` or `saving`.
    pub fn tips_screen_for(&self, tips: &[FinancialTip], filter: &str) -> Result<TipsScreen> {
        let selected: TipFilter = filter.parse()?;
        Ok(self.tips_screen(tips, selected))
    }

    pub fn plan_card(&self, plan: &SubscriptionPlan) -> PlanCard {
        let monthly = format!("{}/month", self.money(plan.price));
        PlanCard {
            id: plan.id.clone(),
            name: plan.name.to_string(),
            price: if plan.is_free() { "Free".into() } else { monthly.clone() },
            features: plan.features.clone(),
            is_popular: plan.is_popular,
            upgrade_label: (!plan.is_free()).then(|| format!("Upgrade for {monthly}")),
        }
    }

    pub fn dashboard(&self, snapshot: &FinanceSnapshot) -> DashboardView {
        let summary = SummaryService::dashboard(snapshot, &self.clock);
        let budget = &summary.budget;
        DashboardView {
            greeting: format!("Hello, {}", snapshot.user.first_name()),
            balance: self.balance_card(&snapshot.transactions),
            budget: BudgetProgressCard {
                spent_of_total: self.amount_of(budget.total_spent, budget.total_budget),
                percent: format_percentage(budget.total_spent, budget.total_budget),
                progress: clamp_progress(budget.progress),
                tone: progress_tone(budget.progress, true),
            },
            top_goal: summary.top_goal.map(|goal| self.savings_goal_card(goal)),
            recent_transactions: summary
                .recent_transactions
                .iter()
                .map(|transaction| self.transaction_row(transaction))
                .collect(),
            featured_tip: summary.featured_tip.map(|tip| self.tip_card(tip)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mfuko_core::{FixedClock, ProgressTone};
    use mfuko_domain::{SubscriptionTier, TipCategory, TransactionCategory};

    use crate::MfukoError;

    fn presenter_on(y: i32, m: u32, d: u32) -> Presenter<FixedClock> {
        let today = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        Presenter::new(DisplayFormatter::default(), FixedClock::at(today, 9).unwrap())
    }

    fn presenter() -> Presenter<FixedClock> {
        presenter_on(2025, 3, 20)
    }

    #[test]
    fn month_label_follows_the_budget_not_the_clock() {
        let march = Budget::new(3, 2025, 90000.0);
        let overview = presenter_on(2025, 5, 10).budget_overview(&march);
        assert_eq!(overview.month_label, "March 2025");

        let malformed = Budget::new(13, 2025, 90000.0);
        let overview = presenter_on(2025, 5, 10).budget_overview(&malformed);
        assert_eq!(overview.month_label, "May 2025");
    }

    #[test]
    fn tips_screen_parses_filter_tags() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let tips = vec![
            FinancialTip::new("Track it", "Body", TipCategory::Budgeting, date).with_id("1"),
            FinancialTip::new("Pay yourself", "Body", TipCategory::Saving, date).with_id("2"),
        ];
        let screen = presenter().tips_screen_for(&tips, "saving").unwrap();
        assert_eq!(screen.count_label, "1 tip available");
        assert_eq!(screen.tips[0].id, "2");
        assert!(screen.filters.iter().any(|chip| chip.value == "saving" && chip.selected));

        assert_eq!(presenter().tips_screen_for(&tips, "All").unwrap().tips.len(), 2);
        match presenter().tips_screen_for(&tips, "gambling") {
            Err(MfukoError::Tag(err)) => assert!(err.to_string().contains("gambling")),
            other => panic!("expected tag error, got {other:?}"),
        }
    }

    #[test]
    fn overspent_budget_flags_negative_remaining() {
        let budget = Budget::new(3, 2025, 100000.0).with_categories(vec![BudgetCategory::new(
            TransactionCategory::Food,
            100000.0,
            120000.0,
        )]);
        let overview = presenter().budget_overview(&budget);
        assert_eq!(overview.month_label, "March 2025");
        assert_eq!(overview.remaining, "TZS -20,000");
        assert!(overview.remaining_is_negative);
        assert_eq!(overview.used_label, "120% Used");
        assert_eq!(overview.progress, 1.0);
        assert_eq!(overview.tone, ProgressTone::Critical);
    }

    #[test]
    fn zero_cap_category_reads_zero_percent() {
        let category = BudgetCategory::new(TransactionCategory::Other, 0.0, 500.0);
        let card = presenter().category_card(&category);
        assert_eq!(card.percent, "0%");
        assert_eq!(card.status, "Within Budget");
        assert_eq!(card.name, "Other");
    }

    #[test]
    fn free_plan_has_no_upgrade_label() {
        let plan = SubscriptionPlan {
            id: "free".into(),
            name: SubscriptionTier::Free,
            price: 0.0,
            features: vec!["Basic tracking".into()],
            is_popular: false,
        };
        let card = presenter().plan_card(&plan);
        assert_eq!(card.price, "Free");
        assert!(card.upgrade_label.is_none());
    }

    #[test]
    fn empty_goal_list_shows_prompt() {
        let screen = presenter().savings_screen(&[]);
        assert!(screen.goals.is_empty());
        assert_eq!(screen.empty_message.as_deref(), Some(EMPTY_SAVINGS_MESSAGE));
        assert_eq!(screen.total_saved, "TZS 0");
    }
}
