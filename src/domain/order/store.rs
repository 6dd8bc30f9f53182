use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::RwLock;

use super::errors::OrderError;
use super::value_objects::{NewOrder, Order, OrderStatus};

// ============================================================================
// Order Store - append-only, in-process
// ============================================================================
//
// Owns the order collection and the next-identifier counter. Both live behind
// one RwLock so that allocating an id and appending the order happen as a
// single step, and readers only ever see whole orders.
//
// ============================================================================

struct StoreState {
    orders: Vec<Order>,
    next_id: i64,
}

pub struct OrderStore {
    state: RwLock<StoreState>,
}

impl OrderStore {
    /// Empty store; the first appended order gets id 1.
    pub fn new() -> Self {
        Self::with_orders(Vec::new())
    }

    /// Store preloaded with `orders`; new ids continue after the highest seeded id.
    pub fn with_orders(orders: Vec<Order>) -> Self {
        let next_id = orders.iter().map(|o| o.id).max().unwrap_or(0) + 1;
        Self {
            state: RwLock::new(StoreState { orders, next_id }),
        }
    }

    /// Store holding the demo fixture orders (ids 1 and 2).
    pub fn seeded() -> Self {
        Self::with_orders(fixture_orders())
    }

    /// Assign the next identifier to `draft` and append it.
    pub async fn append(&self, draft: NewOrder) -> Order {
        let mut state = self.state.write().await;

        let id = state.next_id;
        state.next_id += 1;

        let order = draft.into_order(id);
        state.orders.push(order.clone());

        tracing::debug!(order_id = id, total_orders = state.orders.len(), "Order appended");
        order
    }

    /// Snapshot of all orders in insertion order.
    pub async fn list(&self) -> Vec<Order> {
        self.state.read().await.orders.clone()
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Order, OrderError> {
        self.state
            .read()
            .await
            .orders
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(OrderError::OrderNotFound(id))
    }

    /// Identifier the next append will receive.
    pub async fn next_id(&self) -> i64 {
        self.state.read().await.next_id
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.orders.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

fn fixture_time(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn fixture_orders() -> Vec<Order> {
    vec![
        Order {
            id: 1,
            user_id: 1,
            product_ids: vec![1, 2],
            total: 1015.98,
            status: OrderStatus::Completed,
            created: fixture_time(10, 30),
        },
        Order {
            id: 2,
            user_id: 2,
            product_ids: vec![3],
            total: 29.99,
            status: OrderStatus::Pending,
            created: fixture_time(11, 15),
        },
    ]
}
