//! Upgrade flow wiring: the HTTP backend and a client built from [`Config`].

pub mod http;

pub use http::HttpSubscriptionBackend;
pub use mfuko_core::{ProductCatalog, RedirectUrls, SubscriptionBackend, SubscriptionClient};

use mfuko_config::Config;

use crate::errors::{MfukoError, Result};

/// Subscription client against the configured backend and product catalog.
pub fn client_from_config(config: &Config) -> Result<SubscriptionClient<HttpSubscriptionBackend>> {
    if !config.backend.is_configured() {
        return Err(MfukoError::Config("backend base_url is not set".into()));
    }
    let backend = HttpSubscriptionBackend::from_settings(&config.backend)?;
    tracing::debug!(base_url = %backend.base_url(), products = config.products.len(), "subscription client ready");
    Ok(SubscriptionClient::new(
        backend,
        ProductCatalog::new(config.products.clone()),
        RedirectUrls {
            success_url: config.backend.success_url.clone(),
            cancel_url: config.backend.cancel_url.clone(),
        },
    ))
}
