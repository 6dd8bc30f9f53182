use std::sync::Arc;

use actix_web::{web, App, HttpServer};

use crate::api;
use crate::config::Config;
use crate::metrics::{Metrics, MetricsSink};
use crate::middleware::RequestMetrics;

/// Serve `configure`'s routes plus `/health` and `/metrics` on `config.port`.
///
/// Every route is wrapped in the request-metrics middleware. Runs until the
/// server is stopped.
pub async fn run<F>(config: Config, metrics: Arc<Metrics>, configure: F) -> std::io::Result<()>
where
    F: Fn(&mut web::ServiceConfig) + Clone + Send + 'static,
{
    let port = config.port;
    tracing::info!(
        service = %config.service_name,
        "Starting HTTP server on http://0.0.0.0:{}",
        port
    );

    let config = web::Data::new(config);
    let metrics_data = web::Data::from(metrics.clone());
    let sink: Arc<dyn MetricsSink> = metrics;

    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .app_data(metrics_data.clone())
            .app_data(web::Data::from(sink.clone()))
            .wrap(RequestMetrics::new(sink.clone()))
            .configure(configure.clone())
            .configure(api::configure_ops)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
