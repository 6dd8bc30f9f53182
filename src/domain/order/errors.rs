use crate::clients::LookupError;

// ============================================================================
// Order Workflow Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error("User not found")]
    UserNotFound(i64),

    #[error("Product {0} not found")]
    ProductNotFound(i64),

    #[error("Order not found")]
    OrderNotFound(i64),
}

impl From<LookupError> for OrderError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::UserNotFound(id) => OrderError::UserNotFound(id),
            LookupError::ProductNotFound(id) => OrderError::ProductNotFound(id),
        }
    }
}
