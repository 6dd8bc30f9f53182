//! HTTP handlers for the three services.
//!
//! Each service module exposes a `configure` function that registers its
//! routes; `health` and `/metrics` are shared by all of them.

pub mod error;
pub mod health;
pub mod orders;
pub mod products;
pub mod users;

pub use error::ApiError;

use actix_web::web;

use crate::metrics::metrics_handler;

/// `/health` and `/metrics`, mounted on every service.
pub fn configure_ops(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_handler))
        .route("/metrics", web::get().to(metrics_handler));
}
