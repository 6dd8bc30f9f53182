use std::time::Duration;

use actix_web::{web, HttpResponse};
use tracing::{field, Instrument};

use super::error::{parse_id, ApiError};
use crate::domain::product::{self, Product};
use crate::metrics::MetricsSink;

/// Artificial processing time of the catalog listing.
const LIST_PRODUCTS_DELAY: Duration = Duration::from_millis(50);

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/products", web::get().to(list_products))
        .route("/products/{id}", web::get().to(get_product))
        .route(
            "/products/category/{category}",
            web::get().to(products_by_category),
        );
}

async fn list_products(products: web::Data<Vec<Product>>) -> HttpResponse {
    let span = tracing::info_span!(
        "get-products",
        operation = "get-products",
        product.count = products.len()
    );
    async {
        tokio::time::sleep(LIST_PRODUCTS_DELAY).await;
        HttpResponse::Ok().json(products.as_slice())
    }
    .instrument(span)
    .await
}

async fn get_product(
    products: web::Data<Vec<Product>>,
    metrics: web::Data<dyn MetricsSink>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let span = tracing::info_span!(
        "get-product",
        product.id = field::Empty,
        product.name = field::Empty,
        product.category = field::Empty,
        product.price = field::Empty,
        error = field::Empty,
    );
    async {
        let span = tracing::Span::current();
        let id = match parse_id(&id, "product") {
            Ok(id) => id,
            Err(e) => {
                span.record("error", "invalid product id");
                return Err(e);
            }
        };
        span.record("product.id", id);

        let Some(product) = product::find_product(&products, id) else {
            span.record("error", "product not found");
            return Err(ApiError::not_found("Product"));
        };

        metrics.record_product_view(product.id, &product.category);
        span.record("product.name", product.name.as_str());
        span.record("product.category", product.category.as_str());
        span.record("product.price", product.price);

        Ok(HttpResponse::Ok().json(product))
    }
    .instrument(span)
    .await
}

async fn products_by_category(
    products: web::Data<Vec<Product>>,
    category: web::Path<String>,
) -> HttpResponse {
    let span = tracing::info_span!(
        "get-products-by-category",
        product.category = %category,
        filtered.count = field::Empty,
    );
    let _entered = span.enter();

    let filtered = product::in_category(&products, &category);
    span.record("filtered.count", filtered.len());
    HttpResponse::Ok().json(filtered)
}
