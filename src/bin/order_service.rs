use std::sync::Arc;

use actix_web::web;
use shop_mesh::api;
use shop_mesh::clients::{ProductServiceClient, UserServiceClient};
use shop_mesh::config::ServiceUrl;
use shop_mesh::domain::order::{OrderService, OrderStore};
use shop_mesh::{server, telemetry, Config, Metrics};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env("order-service");
    telemetry::init_tracing(&config);

    let metrics = Arc::new(Metrics::new()?);
    let store = Arc::new(OrderStore::seeded());

    tracing::info!(
        user_service = %config.user_service_url,
        product_service = %config.product_service_url,
        seeded_orders = store.len().await,
        "Order service dependencies configured"
    );

    let orders = web::Data::new(OrderService::new(
        store,
        Arc::new(UserServiceClient::new(ServiceUrl::user_service())),
        Arc::new(ProductServiceClient::new(ServiceUrl::product_service())),
        metrics.clone(),
    ));

    server::run(config, metrics, move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(orders.clone());
        api::orders::configure(cfg);
    })
    .await?;

    Ok(())
}
