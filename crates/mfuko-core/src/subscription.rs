//! Checkout and subscription lookups against an opaque payments backend.

use async_trait::async_trait;
use mfuko_domain::{CheckoutMode, Product, SubscriptionRecord, User};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CoreError, CoreResult};

/// Body sent to the backend's checkout function.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub price_id: String,
    pub mode: CheckoutMode,
    pub success_url: String,
    pub cancel_url: String,
}

/// Reply from the checkout function.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CheckoutResponse {
    #[serde(default)]
    pub session_url: Option<String>,
}

/// Remote collaborator that creates checkout sessions and stores subscription rows.
///
/// Each call is one network round trip. Implementations surface remote failures as
/// [`CoreError::Remote`] without retrying.
#[async_trait]
pub trait SubscriptionBackend: Send + Sync {
    async fn invoke_checkout(&self, request: &CheckoutRequest) -> CoreResult<CheckoutResponse>;

    /// Returns the subscription row visible to the session behind `access_token`, or `None`.
    async fn fetch_subscription(&self, access_token: &str) -> CoreResult<Option<SubscriptionRecord>>;
}

/// Products a checkout can be opened for, keyed by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == product_id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

/// Where the payments page sends the user after checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectUrls {
    pub success_url: String,
    pub cancel_url: String,
}

pub struct SubscriptionClient<B> {
    backend: B,
    catalog: ProductCatalog,
    redirects: RedirectUrls,
}

impl<B: SubscriptionBackend> SubscriptionClient<B> {
    pub fn new(backend: B, catalog: ProductCatalog, redirects: RedirectUrls) -> Self {
        Self {
            backend,
            catalog,
            redirects,
        }
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Opens a checkout session for `product_id` and returns the hosted payment page URL.
    pub async fn create_checkout_session(&self, product_id: &str) -> CoreResult<Url> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| CoreError::InvalidProduct(product_id.to_string()))?;

        let request = CheckoutRequest {
            price_id: product.price_id.clone(),
            mode: product.mode,
            success_url: self.redirects.success_url.clone(),
            cancel_url: self.redirects.cancel_url.clone(),
        };
        tracing::info!(product_id, price_id = %request.price_id, mode = %request.mode, "creating checkout session");

        let response = self.backend.invoke_checkout(&request).await.map_err(|err| {
            tracing::warn!(product_id, error = %err, "checkout session failed");
            err
        })?;
        let session_url = response.session_url.ok_or_else(|| {
            CoreError::InvalidResponse("checkout response has no session_url".into())
        })?;
        Url::parse(&session_url).map_err(|err| {
            CoreError::InvalidResponse(format!("session_url `{session_url}` is not a URL: {err}"))
        })
    }

    /// Fetches the subscription for `user`. Resolves to `None` without a signed-in session.
    pub async fn get_subscription(
        &self,
        user: Option<&User>,
    ) -> CoreResult<Option<SubscriptionRecord>> {
        let Some(user) = user else {
            tracing::debug!("no authenticated user; skipping subscription lookup");
            return Ok(None);
        };
        let Some(token) = user.session_token() else {
            tracing::debug!(user_id = %user.id, "user has no session; skipping subscription lookup");
            return Ok(None);
        };
        let record = self.backend.fetch_subscription(token).await.map_err(|err| {
            tracing::warn!(user_id = %user.id, error = %err, "subscription lookup failed");
            err
        })?;
        tracing::info!(
            user_id = %user.id,
            status = record.as_ref().map(|r| r.subscription_status.as_str()).unwrap_or("none"),
            "subscription fetched"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use mfuko_domain::SubscriptionStatus;

    #[derive(Default)]
    struct FakeBackend {
        session_url: Option<String>,
        fail_with: Option<String>,
        record: Option<SubscriptionRecord>,
        requests: Mutex<Vec<CheckoutRequest>>,
        lookups: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SubscriptionBackend for FakeBackend {
        async fn invoke_checkout(&self, request: &CheckoutRequest) -> CoreResult<CheckoutResponse> {
            self.requests.lock().unwrap().push(request.clone());
            if let Some(message) = &self.fail_with {
                return Err(CoreError::Remote(message.clone()));
            }
            Ok(CheckoutResponse {
                session_url: self.session_url.clone(),
            })
        }

        async fn fetch_subscription(&self, access_token: &str) -> CoreResult<Option<SubscriptionRecord>> {
            self.lookups.lock().unwrap().push(access_token.to_string());
            if let Some(message) = &self.fail_with {
                return Err(CoreError::Remote(message.clone()));
            }
            Ok(self.record.clone())
        }
    }

    fn client(backend: FakeBackend) -> SubscriptionClient<FakeBackend> {
        let catalog = ProductCatalog::new(vec![Product::new(
            "premium",
            "Premium",
            "price_premium_monthly",
            CheckoutMode::Subscription,
        )]);
        let redirects = RedirectUrls {
            success_url: "https://app.example/checkout/success".into(),
            cancel_url: "https://app.example/checkout/cancel".into(),
        };
        SubscriptionClient::new(backend, catalog, redirects)
    }

    #[tokio::test]
    async fn checkout_sends_product_price_and_redirects() {
        let client = client(FakeBackend {
            session_url: Some("https://checkout.example/c/pay/cs_test_1".into()),
            ..FakeBackend::default()
        });
        let url = client.create_checkout_session("premium").await.expect("session url");
        assert_eq!(url.as_str(), "https://checkout.example/c/pay/cs_test_1");

        let requests = client.backend().requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].price_id, "price_premium_monthly");
        assert_eq!(requests[0].mode, CheckoutMode::Subscription);
        assert_eq!(requests[0].cancel_url, "https://app.example/checkout/cancel");
    }

    #[tokio::test]
    async fn unknown_product_never_reaches_backend() {
        let client = client(FakeBackend::default());
        let err = client.create_checkout_session("gold").await.unwrap_err();
        assert_eq!(err, CoreError::InvalidProduct("gold".into()));
        assert_eq!(err.to_string(), "Invalid product ID: gold");
        assert!(client.backend().requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn backend_errors_surface_verbatim() {
        let client = client(FakeBackend {
            fail_with: Some("No such price: price_premium_monthly".into()),
            ..FakeBackend::default()
        });
        let err = client.create_checkout_session("premium").await.unwrap_err();
        assert_eq!(err, CoreError::Remote("No such price: price_premium_monthly".into()));
    }

    #[tokio::test]
    async fn missing_or_malformed_session_url_is_rejected() {
        let missing = client(FakeBackend::default());
        assert!(matches!(
            missing.create_checkout_session("premium").await,
            Err(CoreError::InvalidResponse(_))
        ));

        let malformed = client(FakeBackend {
            session_url: Some("not a url".into()),
            ..FakeBackend::default()
        });
        assert!(matches!(
            malformed.create_checkout_session("premium").await,
            Err(CoreError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn subscription_lookup_needs_a_user() {
        let client = client(FakeBackend {
            record: Some(SubscriptionRecord {
                customer_id: "cus_1".into(),
                subscription_id: Some("sub_1".into()),
                subscription_status: SubscriptionStatus::Active,
                price_id: Some("price_premium_monthly".into()),
                current_period_start: None,
                current_period_end: None,
                cancel_at_period_end: false,
                payment_method_brand: None,
                payment_method_last4: None,
            }),
            ..FakeBackend::default()
        });
        assert_eq!(client.get_subscription(None).await, Ok(None));
        assert!(client.backend().lookups.lock().unwrap().is_empty());

        let user = User::new("Sophia Mwakasege", "sophia.m@udsm.ac.tz", "UDSM")
            .with_id("1")
            .with_access_token("jwt-sophia");
        let record = client
            .get_subscription(Some(&user))
            .await
            .expect("lookup succeeds")
            .expect("record present");
        assert!(record.is_active());
        assert_eq!(*client.backend().lookups.lock().unwrap(), vec!["jwt-sophia".to_string()]);
    }

    #[tokio::test]
    async fn absent_subscription_resolves_to_none() {
        let client = client(FakeBackend::default());
        let user = User::new("Baraka", "baraka@example.com", "ARU").with_access_token("jwt-baraka");
        assert_eq!(client.get_subscription(Some(&user)).await, Ok(None));
    }

    #[tokio::test]
    async fn user_without_session_is_not_looked_up() {
        let client = client(FakeBackend::default());
        let signed_out = User::new("Baraka", "baraka@example.com", "ARU");
        assert_eq!(client.get_subscription(Some(&signed_out)).await, Ok(None));
        let blank = User::new("Neema", "neema@example.com", "SUA").with_access_token("  ");
        assert_eq!(client.get_subscription(Some(&blank)).await, Ok(None));
        assert!(client.backend().lookups.lock().unwrap().is_empty());
    }
}
