// ============================================================================
// shop_mesh - user, product and order services
// ============================================================================
//
// Three small HTTP services over in-memory fixture data. The order service
// owns the only real workflow: validate the user, price each product through
// the product service, record the order.
//
// Shared by every binary in src/bin/:
// - config     - environment-driven settings
// - telemetry  - tracing subscriber setup
// - metrics    - Prometheus registry and the MetricsSink seam
// - middleware - per-request latency / completion metrics
// - server     - HTTP bootstrap
//
// ============================================================================

pub mod api;
pub mod clients;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod middleware;
pub mod server;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use metrics::{Metrics, MetricsSink};
