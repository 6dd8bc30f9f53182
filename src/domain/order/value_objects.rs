use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Order Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub product_ids: Vec<i64>,
    /// Sum of the resolved product prices at creation, in request order
    pub total: f64,
    pub status: OrderStatus,
    pub created: DateTime<Utc>,
}

/// Body of `POST /orders`.
///
/// `total` and `status` are derived by the service; if a client sends them
/// they are ignored. A missing or `null` field takes its zero value, so an
/// absent user reads as user `0` and fails the user check.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_ids: Vec<i64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Everything an order needs except its identifier, which only the store assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: i64,
    pub product_ids: Vec<i64>,
    pub total: f64,
    pub status: OrderStatus,
    pub created: DateTime<Utc>,
}

impl NewOrder {
    /// A fresh order: `pending`, stamped now to whole-second precision.
    pub fn pending(user_id: i64, product_ids: Vec<i64>, total: f64) -> Self {
        Self {
            user_id,
            product_ids,
            total,
            status: OrderStatus::Pending,
            created: Utc::now().trunc_subsecs(0),
        }
    }

    pub fn into_order(self, id: i64) -> Order {
        Order {
            id,
            user_id: self.user_id,
            product_ids: self.product_ids,
            total: self.total,
            status: self.status,
            created: self.created,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
