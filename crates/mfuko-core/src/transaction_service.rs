use std::collections::BTreeMap;

use mfuko_domain::{IncomeSource, Transaction, TransactionCategory, TransactionType};
use serde::Serialize;

/// Income, expenses and their difference over a set of transactions.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CashFlowSummary {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

pub struct TransactionService;

impl TransactionService {
    fn total_of(transactions: &[Transaction], kind: TransactionType) -> f64 {
        transactions
            .iter()
            .filter(|txn| txn.kind == kind)
            .map(|txn| txn.amount)
            .sum()
    }

    pub fn total_income(transactions: &[Transaction]) -> f64 {
        Self::total_of(transactions, TransactionType::Income)
    }

    pub fn total_expenses(transactions: &[Transaction]) -> f64 {
        Self::total_of(transactions, TransactionType::Expense)
    }

    /// Income minus expenses.
    pub fn net_balance(transactions: &[Transaction]) -> f64 {
        Self::total_income(transactions) - Self::total_expenses(transactions)
    }

    /// The first `count` transactions in dataset order.
    pub fn recent(transactions: &[Transaction], count: usize) -> &[Transaction] {
        &transactions[..count.min(transactions.len())]
    }

    /// Expense totals grouped by category. Categories without expenses are omitted.
    pub fn spending_by_category(transactions: &[Transaction]) -> BTreeMap<TransactionCategory, f64> {
        let mut totals = BTreeMap::new();
        for txn in transactions.iter().filter(|txn| txn.is_expense()) {
            *totals.entry(txn.category).or_insert(0.0) += txn.amount;
        }
        totals
    }

    /// Income totals grouped by source. Income without a source counts as [`IncomeSource::Other`].
    pub fn income_by_source(transactions: &[Transaction]) -> BTreeMap<IncomeSource, f64> {
        let mut totals = BTreeMap::new();
        for txn in transactions.iter().filter(|txn| txn.is_income()) {
            let source = txn.source.unwrap_or(IncomeSource::Other);
            *totals.entry(source).or_insert(0.0) += txn.amount;
        }
        totals
    }

    pub fn summarize(transactions: &[Transaction]) -> CashFlowSummary {
        let income = Self::total_income(transactions);
        let expenses = Self::total_expenses(transactions);
        CashFlowSummary {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}
