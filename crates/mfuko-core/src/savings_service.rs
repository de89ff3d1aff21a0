use std::cmp::Ordering;

use mfuko_domain::SavingsGoal;
use serde::Serialize;

use crate::ratio::safe_ratio;

/// Totals across every savings goal.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SavingsSummary {
    pub total_saved: f64,
    pub total_target: f64,
    pub progress: f64,
    pub goal_count: usize,
    pub completed_count: usize,
}

/// Stateless helpers over savings goals.
pub struct SavingsService;

impl SavingsService {
    /// Unclamped `current_amount / target_amount`.
    pub fn progress(goal: &SavingsGoal) -> f64 {
        safe_ratio(goal.current_amount, goal.target_amount)
    }

    /// Amount still needed; never negative.
    pub fn remaining(goal: &SavingsGoal) -> f64 {
        (goal.target_amount - goal.current_amount).max(0.0)
    }

    pub fn is_complete(goal: &SavingsGoal) -> bool {
        goal.target_amount > 0.0 && goal.current_amount >= goal.target_amount
    }

    /// Goals ordered by descending progress so the most advanced goal comes first.
    pub fn ranked(goals: &[SavingsGoal]) -> Vec<&SavingsGoal> {
        let mut ranked: Vec<&SavingsGoal> = goals.iter().collect();
        ranked.sort_by(|a, b| {
            Self::progress(b)
                .partial_cmp(&Self::progress(a))
                .unwrap_or(Ordering::Equal)
        });
        ranked
    }

    pub fn top_goal(goals: &[SavingsGoal]) -> Option<&SavingsGoal> {
        Self::ranked(goals).into_iter().next()
    }

    pub fn total_saved(goals: &[SavingsGoal]) -> f64 {
        goals.iter().map(|goal| goal.current_amount).sum()
    }

    pub fn total_target(goals: &[SavingsGoal]) -> f64 {
        goals.iter().map(|goal| goal.target_amount).sum()
    }

    pub fn summarize(goals: &[SavingsGoal]) -> SavingsSummary {
        let total_saved = Self::total_saved(goals);
        let total_target = Self::total_target(goals);
        SavingsSummary {
            total_saved,
            total_target,
            progress: safe_ratio(total_saved, total_target),
            goal_count: goals.len(),
            completed_count: goals.iter().filter(|goal| Self::is_complete(goal)).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_never_negative() {
        let goal = SavingsGoal::new("Phone", 100000.0, 120000.0);
        assert_eq!(SavingsService::remaining(&goal), 0.0);
        assert!(SavingsService::is_complete(&goal));
        assert!((SavingsService::progress(&goal) - 1.2).abs() < 1e-9);
    }

    #[test]
    fn zero_target_goal_has_zero_progress() {
        let goal = SavingsGoal::new("Undefined", 0.0, 5000.0);
        assert_eq!(SavingsService::progress(&goal), 0.0);
        assert!(!SavingsService::is_complete(&goal));
    }

    #[test]
    fn top_goal_of_empty_list_is_none() {
        assert!(SavingsService::top_goal(&[]).is_none());
        let summary = SavingsService::summarize(&[]);
        assert_eq!(summary.goal_count, 0);
        assert_eq!(summary.progress, 0.0);
    }
}
