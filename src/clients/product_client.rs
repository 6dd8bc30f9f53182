use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{field, Instrument};

use super::{LookupError, ProductLookup};
use crate::config::ServiceUrl;
use crate::domain::product;

/// Simulated round trip to the product service.
pub const PRODUCT_LOOKUP_LATENCY: Duration = Duration::from_millis(30);

/// Client for the product service.
///
/// Prices come from a table built from the product catalog; the request URL
/// is resolved per call but never dialed.
#[derive(Debug, Clone)]
pub struct ProductServiceClient {
    base_url: ServiceUrl,
    prices: HashMap<i64, f64>,
    latency: Duration,
}

impl ProductServiceClient {
    pub fn new(base_url: impl Into<ServiceUrl>) -> Self {
        let prices = product::catalog().iter().map(|p| (p.id, p.price)).collect();
        Self::with_prices(base_url, prices)
    }

    pub fn with_prices(base_url: impl Into<ServiceUrl>, prices: HashMap<i64, f64>) -> Self {
        Self {
            base_url: base_url.into(),
            prices,
            latency: PRODUCT_LOOKUP_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn product_url(&self, product_id: i64) -> String {
        format!("{}/products/{}", self.base_url.resolve(), product_id)
    }
}

#[async_trait]
impl ProductLookup for ProductServiceClient {
    async fn lookup_price(&self, product_id: i64) -> Result<f64, LookupError> {
        let span = tracing::info_span!(
            "call-product-service",
            external.service = "product-service",
            product.id = product_id,
            http.url = %self.product_url(product_id),
            product.price = field::Empty,
            outcome = field::Empty,
            error = field::Empty,
        );

        async {
            tokio::time::sleep(self.latency).await;

            let span = tracing::Span::current();
            match self.prices.get(&product_id) {
                Some(&price) => {
                    span.record("product.price", price);
                    span.record("outcome", "found");
                    Ok(price)
                }
                None => {
                    span.record("outcome", "not_found");
                    span.record("error", "product not found");
                    tracing::debug!(product_id, "Product lookup failed");
                    Err(LookupError::ProductNotFound(product_id))
                }
            }
        }
        .instrument(span)
        .await
    }
}
