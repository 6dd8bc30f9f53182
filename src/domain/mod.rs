// ============================================================================
// Domain Layer
// ============================================================================
//
// - order   - order model, store and the create-order workflow
// - user    - user records served by the user service
// - product - product catalog served by the product service
//
// ============================================================================

pub mod order;
pub mod product;
pub mod user;
