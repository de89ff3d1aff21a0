//! Provides budget aggregation helpers over [`Budget`] snapshots.

use std::cmp::Ordering;

use mfuko_domain::{Budget, BudgetCategory};
use serde::Serialize;

use crate::ratio::safe_ratio;

/// Totals for the budget overview card.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetSummary {
    pub total_budget: f64,
    pub total_spent: f64,
    /// `total_budget - total_spent`; negative once the budget is overspent.
    pub remaining: f64,
    /// Unclamped `total_spent / total_budget`.
    pub progress: f64,
}

impl BudgetSummary {
    pub fn is_overspent(&self) -> bool {
        self.remaining < 0.0
    }
}

/// Stateless budgeting utilities that operate over [`Budget`] snapshots.
pub struct BudgetService;

impl BudgetService {
    /// Sum of `spent` across every category.
    pub fn total_spent(budget: &Budget) -> f64 {
        budget.categories.iter().map(|category| category.spent).sum()
    }

    /// Sum of category caps, which may differ from the budget's own total.
    pub fn total_allocated(budget: &Budget) -> f64 {
        budget.categories.iter().map(|category| category.amount).sum()
    }

    pub fn remaining(budget: &Budget) -> f64 {
        budget.total_amount - Self::total_spent(budget)
    }

    pub fn progress(budget: &Budget) -> f64 {
        safe_ratio(Self::total_spent(budget), budget.total_amount)
    }

    pub fn category_progress(category: &BudgetCategory) -> f64 {
        safe_ratio(category.spent, category.amount)
    }

    pub fn is_over_budget(category: &BudgetCategory) -> bool {
        Self::category_progress(category) > 1.0
    }

    /// Categories ordered by highest utilization first. Ties keep dataset order.
    pub fn categories_by_utilization(budget: &Budget) -> Vec<&BudgetCategory> {
        let mut sorted: Vec<&BudgetCategory> = budget.categories.iter().collect();
        sorted.sort_by(|a, b| {
            Self::category_progress(b)
                .partial_cmp(&Self::category_progress(a))
                .unwrap_or(Ordering::Equal)
        });
        sorted
    }

    pub fn over_budget_categories(budget: &Budget) -> Vec<&BudgetCategory> {
        budget
            .categories
            .iter()
            .filter(|category| Self::is_over_budget(category))
            .collect()
    }

    pub fn summarize(budget: &Budget) -> BudgetSummary {
        let total_spent = Self::total_spent(budget);
        let summary = BudgetSummary {
            total_budget: budget.total_amount,
            total_spent,
            remaining: budget.total_amount - total_spent,
            progress: safe_ratio(total_spent, budget.total_amount),
        };
        tracing::debug!(
            budget_id = %budget.id,
            total_spent,
            remaining = summary.remaining,
            "budget summarized"
        );
        summary
    }
}
