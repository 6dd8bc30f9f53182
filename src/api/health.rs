use actix_web::{web, HttpResponse, Responder};
use chrono::{SecondsFormat, Utc};

use crate::config::Config;

/// `GET /health` - always 200
pub async fn health_handler(config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": config.service_name,
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    }))
}
