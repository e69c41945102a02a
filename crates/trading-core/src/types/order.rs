//! Order types exchanged with the execution layer.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Order status as reported by the execution layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Received but not yet acknowledged by the venue
    Pending,
    /// Acknowledged by the venue
    Accepted,
    /// Completely filled
    Filled,
    Rejected,
    Canceled,
}

impl OrderStatus {
    /// The venue has acknowledged the order, so a trade is (or will be) open.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, OrderStatus::Accepted | OrderStatus::Filled)
    }
}

/// Market order with attached stop and target distances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub instrument: String,
    pub side: Side,
    /// Lot size
    pub size: Decimal,
    pub stop_distance: Decimal,
    pub target_distance: Decimal,
}

impl OrderRequest {
    pub fn new(
        instrument: impl Into<String>,
        side: Side,
        size: Decimal,
        stop_distance: Decimal,
        target_distance: Decimal,
    ) -> Self {
        Self {
            instrument: instrument.into(),
            side,
            size,
            stop_distance,
            target_distance,
        }
    }
}

/// Handle returned by the execution layer for a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderHandle {
    pub id: Uuid,
    pub instrument: String,
    pub side: Side,
    pub size: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl OrderHandle {
    /// Create a handle for a request with a fresh id.
    pub fn from_request(request: &OrderRequest, status: OrderStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            instrument: request.instrument.clone(),
            side: request.side,
            size: request.size,
            status,
            created_at: Utc::now(),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.status.is_confirmed()
    }
}
