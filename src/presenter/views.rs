use serde::Serialize;

use mfuko_core::ProgressTone;

/// Header card of the budget screen.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetOverview {
    pub month_label: String,
    pub remaining: String,
    pub remaining_is_negative: bool,
    pub used_label: String,
    pub spent_of_total: String,
    pub progress: f64,
    pub tone: ProgressTone,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryCard {
    pub id: String,
    pub name: String,
    pub status: String,
    pub over_budget: bool,
    pub spent: String,
    pub amount: String,
    pub percent: String,
    pub progress: f64,
    pub tone: ProgressTone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetScreen {
    pub overview: BudgetOverview,
    pub categories: Vec<CategoryCard>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SavingsGoalCard {
    pub id: String,
    pub name: String,
    pub current: String,
    pub target: String,
    pub remaining: String,
    pub percent: String,
    pub progress: f64,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SavingsScreen {
    pub total_saved: String,
    pub total_target: String,
    pub goals: Vec<SavingsGoalCard>,
    /// Set when there are no goals to list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TransactionRow {
    pub id: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub amount: String,
    pub is_income: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BalanceCard {
    pub balance: String,
    pub income: String,
    pub expenses: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TipCard {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub date: String,
    pub is_read: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FilterChip {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TipsScreen {
    pub filters: Vec<FilterChip>,
    pub tips: Vec<TipCard>,
    pub count_label: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlanCard {
    pub id: String,
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
    pub is_popular: bool,
    /// Call to action on paid plans, e.g. `Upgrade for TZS 2,500/month`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_label: Option<String>,
}

/// Section the home card draws with the budget bar.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetProgressCard {
    pub spent_of_total: String,
    pub percent: String,
    pub progress: f64,
    pub tone: ProgressTone,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub greeting: String,
    pub balance: BalanceCard,
    pub budget: BudgetProgressCard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_goal: Option<SavingsGoalCard>,
    pub recent_transactions: Vec<TransactionRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_tip: Option<TipCard>,
}
