//! Checkout products and subscription records exchanged with the payments backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the payments backend bills a checkout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutMode {
    Payment,
    Subscription,
}

impl CheckoutMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckoutMode::Payment => "payment",
            CheckoutMode::Subscription => "subscription",
        }
    }
}

impl fmt::Display for CheckoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry a checkout session can be opened for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_id: String,
    pub mode: CheckoutMode,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price_id: impl Into<String>,
        mode: CheckoutMode,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price_id: price_id.into(),
            mode,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Lifecycle state reported by the payments backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    NotStarted,
    Incomplete,
    IncompleteExpired,
    Trialing,
    Active,
    PastDue,
    Canceled,
    Unpaid,
    Paused,
    /// Any status this build does not know yet.
    #[serde(other)]
    Unknown,
}

impl SubscriptionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SubscriptionStatus::NotStarted => "not_started",
            SubscriptionStatus::Incomplete => "incomplete",
            SubscriptionStatus::IncompleteExpired => "incomplete_expired",
            SubscriptionStatus::Trialing => "trialing",
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::PastDue => "past_due",
            SubscriptionStatus::Canceled => "canceled",
            SubscriptionStatus::Unpaid => "unpaid",
            SubscriptionStatus::Paused => "paused",
            SubscriptionStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the user's subscription view on the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionRecord {
    pub customer_id: String,
    #[serde(default)]
    pub subscription_id: Option<String>,
    pub subscription_status: SubscriptionStatus,
    #[serde(default)]
    pub price_id: Option<String>,
    /// Unix seconds.
    #[serde(default)]
    pub current_period_start: Option<i64>,
    /// Unix seconds.
    #[serde(default)]
    pub current_period_end: Option<i64>,
    #[serde(default)]
    pub cancel_at_period_end: bool,
    #[serde(default)]
    pub payment_method_brand: Option<String>,
    #[serde(default)]
    pub payment_method_last4: Option<String>,
}

impl SubscriptionRecord {
    /// Active and trialing subscriptions unlock premium features.
    pub fn is_active(&self) -> bool {
        matches!(
            self.subscription_status,
            SubscriptionStatus::Active | SubscriptionStatus::Trialing
        )
    }
}
