use std::sync::Arc;

use actix_web::web;
use shop_mesh::api;
use shop_mesh::domain::product;
use shop_mesh::{server, telemetry, Config, Metrics};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env("product-service");
    telemetry::init_tracing(&config);

    let metrics = Arc::new(Metrics::new()?);
    let products = web::Data::new(product::catalog());

    server::run(config, metrics, move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(products.clone());
        api::products::configure(cfg);
    })
    .await?;

    Ok(())
}
