//! Checks applied to a snapshot at the ingestion boundary.

use std::collections::HashSet;

use mfuko_domain::{FinanceSnapshot, Identifiable};

use crate::error::{CoreError, CoreResult};

/// Rejects snapshots that break the numeric and identity rules the aggregators rely on.
pub fn validate_snapshot(snapshot: &FinanceSnapshot) -> CoreResult<()> {
    let mut problems = Vec::new();

    for txn in &snapshot.transactions {
        if !is_non_negative(txn.amount) {
            problems.push(format!("transaction {} has negative amount {}", txn.id, txn.amount));
        }
        if txn.source.is_some() && !txn.is_income() {
            problems.push(format!("transaction {} is an expense with an income source", txn.id));
        }
    }

    let budget = &snapshot.budget;
    if !(1..=12).contains(&budget.month) {
        problems.push(format!("budget {} has month {} outside 1-12", budget.id, budget.month));
    }
    if !is_non_negative(budget.total_amount) {
        problems.push(format!("budget {} has negative total {}", budget.id, budget.total_amount));
    }
    for category in &budget.categories {
        if !is_non_negative(category.amount) || !is_non_negative(category.spent) {
            problems.push(format!(
                "budget category {} has negative amount or spent",
                category.id
            ));
        }
    }

    for goal in &snapshot.savings_goals {
        if !is_positive(goal.target_amount) {
            problems.push(format!("savings goal {} needs a positive target", goal.id));
        }
        if !is_non_negative(goal.current_amount) {
            problems.push(format!("savings goal {} has negative progress", goal.id));
        }
    }

    check_unique("transaction", &snapshot.transactions, &mut problems);
    check_unique("budget category", &budget.categories, &mut problems);
    check_unique("savings goal", &snapshot.savings_goals, &mut problems);
    check_unique("tip", &snapshot.tips, &mut problems);
    check_unique("plan", &snapshot.plans, &mut problems);

    if problems.is_empty() {
        Ok(())
    } else {
        let message = problems.join("; ");
        tracing::warn!(problems = problems.len(), %message, "snapshot rejected");
        Err(CoreError::Validation(message))
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn check_unique<T: Identifiable>(kind: &str, items: &[T], problems: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id()) {
            problems.push(format!("duplicate {kind} id {}", item.id()));
        }
    }
}
