use std::sync::Arc;

use actix_web::web;
use shop_mesh::api;
use shop_mesh::domain::user;
use shop_mesh::{server, telemetry, Config, Metrics};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env("user-service");
    telemetry::init_tracing(&config);

    let metrics = Arc::new(Metrics::new()?);
    let users = web::Data::new(user::fixture_users());

    server::run(config, metrics, move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(users.clone());
        api::users::configure(cfg);
    })
    .await?;

    Ok(())
}
