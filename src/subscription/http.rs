//! REST backend for checkout functions and the subscriptions view.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use url::Url;

use mfuko_config::BackendSettings;
use mfuko_core::{
    CheckoutRequest, CheckoutResponse, CoreError, CoreResult, SubscriptionBackend,
};
use mfuko_domain::SubscriptionRecord;

const FUNCTIONS_PATH: &str = "functions/v1/";
const REST_PATH: &str = "rest/v1/";

#[derive(Debug, Default, Deserialize)]
struct CheckoutEnvelope {
    #[serde(default)]
    session_url: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// [`SubscriptionBackend`] over HTTP. One request per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpSubscriptionBackend {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    checkout_function: String,
    subscriptions_table: String,
}

impl HttpSubscriptionBackend {
    pub fn new(base_url: &str, api_key: Option<String>) -> CoreResult<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: normalize_base(base_url)?,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            checkout_function: BackendSettings::default_checkout_function(),
            subscriptions_table: BackendSettings::default_subscriptions_table(),
        })
    }

    pub fn from_settings(settings: &BackendSettings) -> CoreResult<Self> {
        let base_url = settings
            .base_url
            .as_deref()
            .ok_or_else(|| CoreError::Configuration("backend base_url is not set".into()))?;
        let mut backend = Self::new(base_url, settings.api_key.clone())?;
        backend.checkout_function = settings.checkout_function.clone();
        backend.subscriptions_table = settings.subscriptions_table.clone();
        Ok(backend)
    }

    /// Replaces the HTTP client, e.g. one built with timeouts.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn checkout_endpoint(&self) -> CoreResult<Url> {
        join(&self.base_url, &format!("{FUNCTIONS_PATH}{}", self.checkout_function))
    }

    /// Row-level security scopes the view to the bearer's own row.
    pub fn subscription_endpoint(&self) -> CoreResult<Url> {
        let mut url = join(&self.base_url, &format!("{REST_PATH}{}", self.subscriptions_table))?;
        url.query_pairs_mut().append_pair("select", "*");
        Ok(url)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.header("apikey", key).bearer_auth(key),
            None => builder,
        }
    }

    /// Project key as `apikey`, the user's session as the bearer.
    fn authorize_session(&self, builder: RequestBuilder, access_token: &str) -> RequestBuilder {
        let builder = match &self.api_key {
            Some(key) => builder.header("apikey", key),
            None => builder,
        };
        builder.bearer_auth(access_token)
    }

    async fn read_body(builder: RequestBuilder) -> CoreResult<String> {
        let response = builder
            .send()
            .await
            .map_err(|err| CoreError::Remote(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| CoreError::Remote(err.to_string()))?;
        if !status.is_success() {
            return Err(CoreError::Remote(remote_message(status, &body)));
        }
        Ok(body)
    }
}

#[async_trait]
impl SubscriptionBackend for HttpSubscriptionBackend {
    async fn invoke_checkout(&self, request: &CheckoutRequest) -> CoreResult<CheckoutResponse> {
        let endpoint = self.checkout_endpoint()?;
        tracing::debug!(%endpoint, "invoking checkout function");
        let builder = self.authorize(self.client.post(endpoint).json(request));
        let body = Self::read_body(builder).await?;
        parse_checkout(&body)
    }

    async fn fetch_subscription(&self, access_token: &str) -> CoreResult<Option<SubscriptionRecord>> {
        let endpoint = self.subscription_endpoint()?;
        tracing::debug!(%endpoint, "querying subscriptions");
        let builder = self.authorize_session(
            self.client
                .get(endpoint)
                .header(reqwest::header::ACCEPT, "application/json"),
            access_token,
        );
        let body = Self::read_body(builder).await?;
        parse_subscription_rows(&body)
    }
}

fn normalize_base(base_url: &str) -> CoreResult<Url> {
    let trimmed = base_url.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&with_slash)
        .map_err(|err| CoreError::Configuration(format!("invalid backend url `{trimmed}`: {err}")))
}

fn join(base: &Url, path: &str) -> CoreResult<Url> {
    base.join(path)
        .map_err(|err| CoreError::Configuration(format!("invalid endpoint `{path}`: {err}")))
}

fn remote_message(status: StatusCode, body: &str) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    match parsed.error.or(parsed.message) {
        Some(message) => message,
        None if body.trim().is_empty() => format!("HTTP {}", status.as_u16()),
        None => format!("HTTP {}: {}", status.as_u16(), body.trim()),
    }
}

fn parse_checkout(body: &str) -> CoreResult<CheckoutResponse> {
    let envelope: CheckoutEnvelope = serde_json::from_str(body)
        .map_err(|err| CoreError::InvalidResponse(format!("checkout reply: {err}")))?;
    if let Some(error) = envelope.error {
        return Err(CoreError::Remote(error));
    }
    Ok(CheckoutResponse {
        session_url: envelope.session_url,
    })
}

fn parse_subscription_rows(body: &str) -> CoreResult<Option<SubscriptionRecord>> {
    let mut rows: Vec<SubscriptionRecord> = serde_json::from_str(body)
        .map_err(|err| CoreError::InvalidResponse(format!("subscription rows: {err}")))?;
    match rows.len() {
        0 => Ok(None),
        1 => Ok(rows.pop()),
        count => Err(CoreError::InvalidResponse(format!(
            "expected at most one subscription row, got {count}"
        ))),
    }
}
