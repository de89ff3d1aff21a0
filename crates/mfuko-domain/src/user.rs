//! Account holder and the plans they can subscribe to.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::common::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    #[serde(alias = "Free")]
    Free,
    #[serde(alias = "Premium")]
    Premium,
}

impl SubscriptionTier {
    pub fn as_str(self) -> &'static str {
        match self {
            SubscriptionTier::Free => "free",
            SubscriptionTier::Premium => "premium",
        }
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SubscriptionTier::Free => "Free",
            SubscriptionTier::Premium => "Premium",
        };
        f.write_str(label)
    }
}

impl FromStr for SubscriptionTier {
    type Err = TagParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_tag(
            "subscription tier",
            value,
            &[
                ("free", SubscriptionTier::Free),
                ("premium", SubscriptionTier::Premium),
            ],
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub university: String,
    #[serde(default)]
    pub subscription_type: SubscriptionTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Bearer token of the signed-in session. Never written back out.
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        university: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            email: email.into(),
            university: university.into(),
            subscription_type: SubscriptionTier::Free,
            profile_image: None,
            access_token: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Session token when the user is signed in, ignoring blank values.
    pub fn session_token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
    }

    pub fn is_premium(&self) -> bool {
        self.subscription_type == SubscriptionTier::Premium
    }

    /// First word of the display name, used in greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

impl Identifiable for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for User {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A purchasable tier with its monthly price and feature list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: SubscriptionTier,
    pub price: f64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
}

impl SubscriptionPlan {
    pub fn is_free(&self) -> bool {
        self.price.abs() < f64::EPSILON
    }
}

impl Identifiable for SubscriptionPlan {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Amounted for SubscriptionPlan {
    fn amount(&self) -> f64 {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_names_accept_capitalised_tags() {
        let json = r#"{"id":"premium","name":"Premium","price":2500,"features":["SMS notifications"],"isPopular":true}"#;
        let plan: SubscriptionPlan = serde_json::from_str(json).expect("valid plan");
        assert_eq!(plan.name, SubscriptionTier::Premium);
        assert!(plan.is_popular && !plan.is_free());
        assert_eq!(plan.name.to_string(), "Premium");
    }

    #[test]
    fn access_token_is_read_but_never_written() {
        let json = r#"{"id":"u1","name":"Amani","email":"a@example.com","university":"UDSM","accessToken":"jwt-1"}"#;
        let user: User = serde_json::from_str(json).expect("valid user");
        assert_eq!(user.session_token(), Some("jwt-1"));
        let written = serde_json::to_string(&user).expect("serializes");
        assert!(!written.contains("jwt-1"));
        assert_eq!(user.with_access_token(" ").session_token(), None);
    }

    #[test]
    fn first_name_takes_leading_word() {
        let user = User::new("Sophia Mwakasege", "sophia.m@udsm.ac.tz", "UDSM");
        assert_eq!(user.first_name(), "Sophia");
        assert!(!user.is_premium());
    }
}
