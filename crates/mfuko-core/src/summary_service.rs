//! Aggregates a whole snapshot for the home view.

use mfuko_domain::{FinanceSnapshot, FinancialTip, SavingsGoal, Transaction};

use crate::{
    budget_service::{BudgetService, BudgetSummary},
    savings_service::SavingsService,
    time::Clock,
    tip_service::TipService,
    transaction_service::{CashFlowSummary, TransactionService},
};

/// Number of transactions listed under "Recent Transactions".
pub const RECENT_TRANSACTION_COUNT: usize = 3;

/// Numbers and picks behind the home view, borrowed from the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary<'a> {
    pub cash_flow: CashFlowSummary,
    pub budget: BudgetSummary,
    pub top_goal: Option<&'a SavingsGoal>,
    pub recent_transactions: &'a [Transaction],
    pub featured_tip: Option<&'a FinancialTip>,
}

pub struct SummaryService;

impl SummaryService {
    /// Builds the dashboard summary. The clock seeds which unread tip is featured.
    pub fn dashboard<'a>(snapshot: &'a FinanceSnapshot, clock: &dyn Clock) -> DashboardSummary<'a> {
        let seed = u64::from(clock.now().timestamp_subsec_nanos());
        DashboardSummary {
            cash_flow: TransactionService::summarize(&snapshot.transactions),
            budget: BudgetService::summarize(&snapshot.budget),
            top_goal: SavingsService::top_goal(&snapshot.savings_goals),
            recent_transactions: TransactionService::recent(
                &snapshot.transactions,
                RECENT_TRANSACTION_COUNT,
            ),
            featured_tip: TipService::featured(&snapshot.tips, seed),
        }
    }
}
