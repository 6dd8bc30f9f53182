//! # Dependency Clients
//!
//! Order-side views of the user and product services. Each call runs inside
//! its own span (`call-user-service` / `call-product-service`) that records
//! the target, the reference being resolved and the outcome. There are no
//! retries and no caching: every call is independent and any failure is final
//! for the caller.

mod product_client;
mod user_client;

use async_trait::async_trait;

pub use product_client::{ProductServiceClient, PRODUCT_LOOKUP_LATENCY};
pub use user_client::{UserServiceClient, USER_LOOKUP_LATENCY};

/// A negative answer from a dependency.
///
/// An unreachable dependency and one that answered "not found" are not told
/// apart; both surface as the not-found variant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    #[error("user {0} not found")]
    UserNotFound(i64),

    #[error("product {0} not found")]
    ProductNotFound(i64),
}

/// Existence check against the user service.
#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn lookup_user(&self, user_id: i64) -> Result<(), LookupError>;
}

/// Price resolution against the product service.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn lookup_price(&self, product_id: i64) -> Result<f64, LookupError>;
}
