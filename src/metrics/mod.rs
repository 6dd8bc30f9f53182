// Private module declaration
mod server;

use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};

// Re-export for public API
pub use server::metrics_handler;

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides:
// - HTTP request throughput and latency (every service)
// - Order creation count and value (order service)
// - Product views (product service)
//
// `Metrics` owns its own registry and is handed to the middleware and the
// order workflow as a `MetricsSink`. Recording never fails the caller: label
// lookups use the fallible API and errors are logged and dropped.
// ============================================================================

/// Recording interface used by the request middleware and the order workflow.
pub trait MetricsSink: Send + Sync {
    /// Latency of one completed request.
    fn observe_request_duration(&self, method: &str, endpoint: &str, seconds: f64);

    /// One completed request, keyed by its final status code.
    fn count_request(&self, method: &str, endpoint: &str, status: u16);

    /// One created order and its value.
    fn record_order(&self, status: &str, total: f64);

    /// One product detail view.
    fn record_product_view(&self, product_id: i64, category: &str);
}

/// Prometheus registry with every metric family the services emit
pub struct Metrics {
    registry: Registry,

    // HTTP Metrics
    pub http_requests_total: IntCounterVec,
    pub http_request_duration: HistogramVec,

    // Order Metrics
    pub orders_total: IntCounterVec,
    pub order_value: HistogramVec,

    // Product Metrics
    pub product_views_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        // HTTP Metrics
        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "endpoint", "status"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "Duration of HTTP requests"),
            &["method", "endpoint"],
        )?;
        registry.register(Box::new(http_request_duration.clone()))?;

        // Order Metrics
        let orders_total = IntCounterVec::new(
            Opts::new("orders_total", "Total number of orders created"),
            &["status"],
        )?;
        registry.register(Box::new(orders_total.clone()))?;

        let order_value = HistogramVec::new(
            HistogramOpts::new("order_value_dollars", "Value of orders in dollars")
                .buckets(vec![10.0, 50.0, 100.0, 500.0, 1000.0, 5000.0]),
            &["status"],
        )?;
        registry.register(Box::new(order_value.clone()))?;

        // Product Metrics
        let product_views_total = IntCounterVec::new(
            Opts::new("product_views_total", "Total number of product views"),
            &["product_id", "category"],
        )?;
        registry.register(Box::new(product_views_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration,
            orders_total,
            order_value,
            product_views_total,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

fn dropped(metric: &str, err: prometheus::Error) {
    tracing::warn!(metric, error = %err, "Dropping metric sample");
}

impl MetricsSink for Metrics {
    fn observe_request_duration(&self, method: &str, endpoint: &str, seconds: f64) {
        match self
            .http_request_duration
            .get_metric_with_label_values(&[method, endpoint])
        {
            Ok(histogram) => histogram.observe(seconds),
            Err(e) => dropped("http_request_duration_seconds", e),
        }
    }

    fn count_request(&self, method: &str, endpoint: &str, status: u16) {
        match self
            .http_requests_total
            .get_metric_with_label_values(&[method, endpoint, &status.to_string()])
        {
            Ok(counter) => counter.inc(),
            Err(e) => dropped("http_requests_total", e),
        }
    }

    fn record_order(&self, status: &str, total: f64) {
        match self.orders_total.get_metric_with_label_values(&[status]) {
            Ok(counter) => counter.inc(),
            Err(e) => dropped("orders_total", e),
        }
        match self.order_value.get_metric_with_label_values(&[status]) {
            Ok(histogram) => histogram.observe(total),
            Err(e) => dropped("order_value_dollars", e),
        }
    }

    fn record_product_view(&self, product_id: i64, category: &str) {
        match self
            .product_views_total
            .get_metric_with_label_values(&[&product_id.to_string(), category])
        {
            Ok(counter) => counter.inc(),
            Err(e) => dropped("product_views_total", e),
        }
    }
}
