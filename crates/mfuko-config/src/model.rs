use std::path::PathBuf;

use mfuko_domain::{CheckoutMode, Product};
use serde::{Deserialize, Serialize};

/// Stores display preferences, backend endpoints and the checkout catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default = "Config::default_products")]
    pub products: Vec<Product>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional JSON dataset to load instead of the bundled sample data.
    pub data_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            backend: BackendSettings::default(),
            products: Self::default_products(),
            data_path: None,
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "en-US".into()
    }

    pub fn default_currency() -> String {
        "TZS".into()
    }

    pub fn default_products() -> Vec<Product> {
        vec![Product::new(
            "premium",
            "Premium",
            "price_premium_monthly",
            CheckoutMode::Subscription,
        )
        .with_description("Unlimited tracking, analytics and daily tips")]
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }
}

/// Connection settings for the hosted payments/subscription backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "BackendSettings::default_checkout_function")]
    pub checkout_function: String,
    #[serde(default = "BackendSettings::default_subscriptions_table")]
    pub subscriptions_table: String,
    #[serde(default = "BackendSettings::default_success_url")]
    pub success_url: String,
    #[serde(default = "BackendSettings::default_cancel_url")]
    pub cancel_url: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            checkout_function: Self::default_checkout_function(),
            subscriptions_table: Self::default_subscriptions_table(),
            success_url: Self::default_success_url(),
            cancel_url: Self::default_cancel_url(),
        }
    }
}

impl BackendSettings {
    pub fn default_checkout_function() -> String {
        "stripe-checkout".into()
    }

    pub fn default_subscriptions_table() -> String {
        "stripe_user_subscriptions".into()
    }

    pub fn default_success_url() -> String {
        "mfuko://checkout/success".into()
    }

    pub fn default_cancel_url() -> String {
        "mfuko://checkout/cancel".into()
    }

    pub fn is_configured(&self) -> bool {
        self.base_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}
