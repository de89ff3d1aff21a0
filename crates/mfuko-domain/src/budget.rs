//! Monthly budget and its category caps.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{common::*, transaction::TransactionCategory};

/// A spending bucket with an allocated cap and accumulated spend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    pub id: String,
    pub name: TransactionCategory,
    pub amount: f64,
    pub spent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl BudgetCategory {
    pub fn new(name: TransactionCategory, amount: f64, spent: f64) -> Self {
        Self {
            id: new_id(),
            name,
            amount,
            spent,
            color: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Identifiable for BudgetCategory {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for BudgetCategory {
    fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl Amounted for BudgetCategory {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Budget for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    /// Calendar month, 1 through 12.
    pub month: u32,
    pub year: i32,
    pub total_amount: f64,
    #[serde(default)]
    pub categories: Vec<BudgetCategory>,
}

impl Budget {
    pub fn new(month: u32, year: i32, total_amount: f64) -> Self {
        Self {
            id: new_id(),
            month,
            year,
            total_amount,
            categories: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_categories(mut self, categories: Vec<BudgetCategory>) -> Self {
        self.categories = categories;
        self
    }

    /// First day of the budget month, or `None` when month/year do not form a date.
    pub fn period_start(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn category(&self, name: TransactionCategory) -> Option<&BudgetCategory> {
        self.categories.iter().find(|category| category.name == name)
    }
}

impl Identifiable for Budget {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Amounted for Budget {
    fn amount(&self) -> f64 {
        self.total_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_start_is_first_of_month() {
        let budget = Budget::new(3, 2025, 360000.0);
        assert_eq!(budget.period_start(), NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(Budget::new(13, 2025, 0.0).period_start(), None);
    }

    #[test]
    fn category_lookup_by_tag() {
        let budget = Budget::new(3, 2025, 160000.0).with_categories(vec![
            BudgetCategory::new(TransactionCategory::Food, 120000.0, 75000.0),
            BudgetCategory::new(TransactionCategory::Transport, 40000.0, 25000.0),
        ]);
        let transport = budget
            .category(TransactionCategory::Transport)
            .expect("transport present");
        assert_eq!(transport.spent, 25000.0);
        assert!(budget.category(TransactionCategory::Clothing).is_none());
    }
}
