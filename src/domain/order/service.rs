use std::sync::Arc;

use tracing::{field, Instrument, Span};

use crate::clients::{ProductLookup, UserLookup};
use crate::metrics::MetricsSink;

use super::errors::OrderError;
use super::store::OrderStore;
use super::value_objects::{CreateOrderRequest, NewOrder, Order};

// ============================================================================
// Order Service
// ============================================================================
//
// Create-order workflow, strictly sequential:
//
//   validate body -> resolve user -> resolve each product (request order)
//     -> append to store -> record business metrics
//
// The first failing lookup aborts the attempt. Nothing is written to the
// store and no identifier is consumed before every lookup has succeeded.
//
// ============================================================================

pub struct OrderService {
    store: Arc<OrderStore>,
    users: Arc<dyn UserLookup>,
    products: Arc<dyn ProductLookup>,
    metrics: Arc<dyn MetricsSink>,
}

fn create_order_span() -> Span {
    tracing::info_span!(
        "create-order",
        user.id = field::Empty,
        product.ids = field::Empty,
        order.id = field::Empty,
        order.total = field::Empty,
        order.status = field::Empty,
        error = field::Empty,
    )
}

/// Parse a `POST /orders` body.
pub fn parse_create_request(body: &[u8]) -> Result<CreateOrderRequest, OrderError> {
    serde_json::from_slice(body).map_err(|e| OrderError::InvalidRequest(e.to_string()))
}

impl OrderService {
    pub fn new(
        store: Arc<OrderStore>,
        users: Arc<dyn UserLookup>,
        products: Arc<dyn ProductLookup>,
        metrics: Arc<dyn MetricsSink>,
    ) -> Self {
        Self {
            store,
            users,
            products,
            metrics,
        }
    }

    /// Full workflow starting from a raw JSON body.
    pub async fn create_order_from_json(&self, body: &[u8]) -> Result<Order, OrderError> {
        async {
            match parse_create_request(body) {
                Ok(request) => self.process(request).await,
                Err(e) => {
                    Span::current().record("error", "invalid request body");
                    tracing::warn!(error = %e, "Rejected order request");
                    Err(e)
                }
            }
        }
        .instrument(create_order_span())
        .await
    }

    /// Workflow for an already-parsed request.
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, OrderError> {
        self.process(request).instrument(create_order_span()).await
    }

    async fn process(&self, request: CreateOrderRequest) -> Result<Order, OrderError> {
        let span = Span::current();
        span.record("user.id", request.user_id);
        span.record("product.ids", field::debug(&request.product_ids));

        if let Err(e) = self.users.lookup_user(request.user_id).await {
            span.record("error", "user validation failed");
            tracing::warn!(user_id = request.user_id, "Order aborted: user validation failed");
            return Err(e.into());
        }

        let mut total = 0.0;
        for &product_id in &request.product_ids {
            match self.products.lookup_price(product_id).await {
                Ok(price) => total += price,
                Err(e) => {
                    span.record("error", "product validation failed");
                    tracing::warn!(
                        user_id = request.user_id,
                        product_id,
                        "Order aborted: product validation failed"
                    );
                    return Err(e.into());
                }
            }
        }

        let order = self
            .store
            .append(NewOrder::pending(request.user_id, request.product_ids, total))
            .await;

        self.metrics.record_order(order.status.as_str(), order.total);

        span.record("order.id", order.id);
        span.record("order.total", order.total);
        span.record("order.status", order.status.as_str());

        tracing::info!(
            order_id = order.id,
            user_id = order.user_id,
            item_count = order.product_ids.len(),
            total = order.total,
            "Order created"
        );

        Ok(order)
    }

    pub async fn list_orders(&self) -> Vec<Order> {
        let span = tracing::info_span!(
            "get-orders",
            operation = "get-orders",
            order.count = field::Empty
        );
        async {
            let orders = self.store.list().await;
            Span::current().record("order.count", orders.len());
            orders
        }
        .instrument(span)
        .await
    }

    pub async fn get_order(&self, id: i64) -> Result<Order, OrderError> {
        let span = tracing::info_span!(
            "get-order",
            order.id = id,
            order.status = field::Empty,
            order.total = field::Empty,
            error = field::Empty,
        );
        async {
            let span = Span::current();
            match self.store.get_by_id(id).await {
                Ok(order) => {
                    span.record("order.status", order.status.as_str());
                    span.record("order.total", order.total);
                    Ok(order)
                }
                Err(e) => {
                    span.record("error", "order not found");
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }
}
