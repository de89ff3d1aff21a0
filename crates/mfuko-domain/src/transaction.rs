//! Domain types representing income and expense activity.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::*;

/// Spending bucket a transaction or budget category belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TransactionCategory {
    Food,
    Transport,
    Accommodation,
    Education,
    Entertainment,
    Utilities,
    Healthcare,
    Clothing,
    Other,
}

impl TransactionCategory {
    pub const ALL: [TransactionCategory; 9] = [
        TransactionCategory::Food,
        TransactionCategory::Transport,
        TransactionCategory::Accommodation,
        TransactionCategory::Education,
        TransactionCategory::Entertainment,
        TransactionCategory::Utilities,
        TransactionCategory::Healthcare,
        TransactionCategory::Clothing,
        TransactionCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionCategory::Food => "food",
            TransactionCategory::Transport => "transport",
            TransactionCategory::Accommodation => "accommodation",
            TransactionCategory::Education => "education",
            TransactionCategory::Entertainment => "entertainment",
            TransactionCategory::Utilities => "utilities",
            TransactionCategory::Healthcare => "healthcare",
            TransactionCategory::Clothing => "clothing",
            TransactionCategory::Other => "other",
        }
    }

    /// Title-cased label used on category cards.
    pub fn label(self) -> String {
        title_case(self.as_str())
    }
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionCategory {
    type Err = TagParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let table = Self::ALL.map(|variant| (variant.as_str(), variant));
        parse_tag("transaction category", value, &table)
    }
}

/// Direction of money flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = TagParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_tag(
            "transaction type",
            value,
            &[
                ("income", TransactionType::Income),
                ("expense", TransactionType::Expense),
            ],
        )
    }
}

/// Where an income transaction came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum IncomeSource {
    /// Higher Education Students' Loans Board disbursement.
    Helsb,
    Family,
    Scholarship,
    Job,
    Business,
    Other,
}

impl IncomeSource {
    pub const ALL: [IncomeSource; 6] = [
        IncomeSource::Helsb,
        IncomeSource::Family,
        IncomeSource::Scholarship,
        IncomeSource::Job,
        IncomeSource::Business,
        IncomeSource::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IncomeSource::Helsb => "helsb",
            IncomeSource::Family => "family",
            IncomeSource::Scholarship => "scholarship",
            IncomeSource::Job => "job",
            IncomeSource::Business => "business",
            IncomeSource::Other => "other",
        }
    }
}

impl fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncomeSource {
    type Err = TagParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let table = Self::ALL.map(|variant| (variant.as_str(), variant));
        parse_tag("income source", value, &table)
    }
}

/// A single income or expense entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: TransactionCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<IncomeSource>,
}

impl Transaction {
    pub fn new(
        kind: TransactionType,
        amount: f64,
        date: NaiveDate,
        description: impl Into<String>,
        category: TransactionCategory,
    ) -> Self {
        Self {
            id: new_id(),
            amount,
            date,
            description: description.into(),
            kind,
            category,
            source: None,
        }
    }

    pub fn income(
        amount: f64,
        date: NaiveDate,
        description: impl Into<String>,
        category: TransactionCategory,
        source: IncomeSource,
    ) -> Self {
        Self::new(TransactionType::Income, amount, date, description, category)
            .with_source(source)
    }

    pub fn expense(
        amount: f64,
        date: NaiveDate,
        description: impl Into<String>,
        category: TransactionCategory,
    ) -> Self {
        Self::new(TransactionType::Expense, amount, date, description, category)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_source(mut self, source: IncomeSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with the sign implied by the transaction type.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}
