// ============================================================================
// Order Domain
// ============================================================================
//
// - Value objects (Order, OrderStatus, CreateOrderRequest)
// - Errors (OrderError)
// - Store (OrderStore, append-only)
// - Service (OrderService, the create-order workflow)
//
// ============================================================================

pub mod errors;
pub mod service;
pub mod store;
pub mod value_objects;

// Re-export for convenience
pub use errors::*;
pub use service::*;
pub use store::*;
pub use value_objects::*;
