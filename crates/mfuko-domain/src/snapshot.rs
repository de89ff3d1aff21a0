use serde::{Deserialize, Serialize};

use crate::{
    budget::Budget, savings::SavingsGoal, tip::FinancialTip, transaction::Transaction,
    user::{SubscriptionPlan, User},
};

/// Everything the budget, savings, tips and home views read, loaded once from a data source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSnapshot {
    pub user: User,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub budget: Budget,
    #[serde(default)]
    pub savings_goals: Vec<SavingsGoal>,
    #[serde(default)]
    pub tips: Vec<FinancialTip>,
    #[serde(default)]
    pub plans: Vec<SubscriptionPlan>,
}

impl FinanceSnapshot {
    pub fn plan(&self, id: &str) -> Option<&SubscriptionPlan> {
        self.plans.iter().find(|plan| plan.id == id)
    }
}
