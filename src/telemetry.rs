use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;

/// Initialize structured logging for a service process.
///
/// Default filter is `info,shop_mesh=debug`; override with `RUST_LOG`.
/// Spans opened by handlers and dependency clients are reported through the
/// same subscriber. Shipping them to the collector at `jaeger_endpoint` is
/// left to an exporter layer and is not wired here.
pub fn init_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,shop_mesh=debug")),
        )
        .init();

    tracing::info!(
        service = %config.service_name,
        collector = %config.jaeger_endpoint,
        "Tracing initialized"
    );
}
