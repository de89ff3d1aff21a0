//! Financial tips shown on the home and tips screens.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    Budgeting,
    Saving,
    Spending,
    Education,
}

impl TipCategory {
    pub const ALL: [TipCategory; 4] = [
        TipCategory::Budgeting,
        TipCategory::Saving,
        TipCategory::Spending,
        TipCategory::Education,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TipCategory::Budgeting => "budgeting",
            TipCategory::Saving => "saving",
            TipCategory::Spending => "spending",
            TipCategory::Education => "education",
        }
    }

    pub fn label(self) -> String {
        title_case(self.as_str())
    }
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipCategory {
    type Err = TagParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let table = Self::ALL.map(|variant| (variant.as_str(), variant));
        parse_tag("tip category", value, &table)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialTip {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: TipCategory,
    pub date_added: NaiveDate,
    #[serde(default)]
    pub is_read: bool,
}

impl FinancialTip {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: TipCategory,
        date_added: NaiveDate,
    ) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            content: content.into(),
            category,
            date_added,
            is_read: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn mark_read(mut self) -> Self {
        self.is_read = true;
        self
    }
}

impl Identifiable for FinancialTip {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for FinancialTip {
    fn name(&self) -> &str {
        &self.title
    }
}
