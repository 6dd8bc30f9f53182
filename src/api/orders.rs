use actix_web::{rt, web, HttpResponse};

use super::error::{parse_id, ApiError};
use crate::domain::order::OrderService;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/orders")
            .route(web::get().to(list_orders))
            .route(web::post().to(create_order)),
    )
    .route("/orders/{id}", web::get().to(get_order));
}

async fn list_orders(service: web::Data<OrderService>) -> HttpResponse {
    HttpResponse::Ok().json(service.list_orders().await)
}

async fn get_order(
    service: web::Data<OrderService>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id, "order")?;
    let order = service.get_order(id).await?;
    Ok(HttpResponse::Ok().json(order))
}

/// The workflow runs on its own task so a client disconnect does not abort it
/// halfway through the dependency calls.
async fn create_order(
    service: web::Data<OrderService>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let order = rt::spawn(async move { service.create_order_from_json(&body).await })
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;
    Ok(HttpResponse::Created().json(order))
}
