//! Open positions reported by the execution layer.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{OrderHandle, OrderRequest, Side};

/// An open trade on one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Broker-assigned position id
    pub id: String,
    pub instrument: String,
    pub side: Side,
    pub size: Decimal,
    pub stop_distance: Decimal,
    pub target_distance: Decimal,
    pub opened_at: DateTime<Utc>,
}

impl Position {
    /// Position opened by a filled order.
    pub fn opened_by(handle: &OrderHandle, request: &OrderRequest) -> Self {
        Self {
            id: handle.id.to_string(),
            instrument: handle.instrument.clone(),
            side: handle.side,
            size: handle.size,
            stop_distance: request.stop_distance,
            target_distance: request.target_distance,
            opened_at: handle.created_at,
        }
    }
}
