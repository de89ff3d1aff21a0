use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::*;

/// A target amount with current progress and an optional deadline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl SavingsGoal {
    pub fn new(name: impl Into<String>, target_amount: f64, current_amount: f64) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            target_amount,
            current_amount,
            deadline: None,
            color: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Identifiable for SavingsGoal {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for SavingsGoal {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for SavingsGoal {
    fn amount(&self) -> f64 {
        self.current_amount
    }
}
