use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{HttpResponse, ResponseError};

use crate::domain::order::OrderError;

/// Error returned by every handler.
///
/// Bodies are plain text; the status says whether the caller sent something
/// bad (400) or asked for something that does not exist (404). `Internal` only
/// covers a crashed workflow task.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid_id(resource: &str) -> Self {
        ApiError::BadRequest(format!("Invalid {} ID", resource))
    }

    pub fn not_found(resource: &str) -> Self {
        ApiError::NotFound(format!("{} not found", resource))
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::InvalidRequest(_) => ApiError::BadRequest("Invalid request body".into()),
            OrderError::UserNotFound(_) | OrderError::ProductNotFound(_) => {
                ApiError::BadRequest(err.to_string())
            }
            OrderError::OrderNotFound(_) => ApiError::not_found("Order"),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}

/// Parse an integer path segment, mapping failure to `Invalid <resource> ID`.
pub fn parse_id(raw: &str, resource: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::invalid_id(resource))
}
