//! Paper execution for dry runs.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::info;
use trading_core::error::ExecutionError;
use trading_core::traits::ExecutionPort;
use trading_core::types::{OrderHandle, OrderRequest, OrderStatus, Position};
use uuid::Uuid;

#[derive(Debug, Default)]
struct PaperState {
    positions: Vec<Position>,
    orders: HashMap<Uuid, OrderHandle>,
}

/// In-memory execution layer.
///
/// Orders with a positive size are filled immediately and open a position
/// that stays until [`ExecutionPort::close_position`] is called. There is no
/// price feed, so the balance never changes.
pub struct PaperBroker {
    balance: Decimal,
    state: Mutex<PaperState>,
}

impl PaperBroker {
    /// Create a paper broker with a fixed account balance.
    pub fn new(balance: Decimal) -> Self {
        Self {
            balance,
            state: Mutex::new(PaperState::default()),
        }
    }

    /// All orders placed so far, in no particular order.
    pub async fn orders(&self) -> Vec<OrderHandle> {
        self.state.lock().await.orders.values().cloned().collect()
    }
}

#[async_trait]
impl ExecutionPort for PaperBroker {
    async fn place_order(&self, request: OrderRequest) -> Result<OrderHandle, ExecutionError> {
        if request.size <= Decimal::ZERO {
            return Err(ExecutionError::Rejected(format!(
                "size must be positive, got {}",
                request.size
            )));
        }
        if request.stop_distance <= Decimal::ZERO {
            return Err(ExecutionError::Rejected(format!(
                "stop distance must be positive, got {}",
                request.stop_distance
            )));
        }

        let handle = OrderHandle::from_request(&request, OrderStatus::Filled);
        let position = Position::opened_by(&handle, &request);

        let mut state = self.state.lock().await;
        state.orders.insert(handle.id, handle.clone());
        state.positions.push(position);

        info!(
            instrument = %handle.instrument,
            order_id = %handle.id,
            side = %handle.side,
            size = %handle.size,
            "Paper order filled"
        );
        Ok(handle)
    }

    async fn list_open_positions(
        &self,
        instrument: Option<&str>,
    ) -> Result<Vec<Position>, ExecutionError> {
        let state = self.state.lock().await;
        Ok(state
            .positions
            .iter()
            .filter(|p| instrument.map_or(true, |i| p.instrument == i))
            .cloned()
            .collect())
    }

    async fn close_position(&self, id: &str) -> Result<bool, ExecutionError> {
        let mut state = self.state.lock().await;
        let before = state.positions.len();
        state.positions.retain(|p| p.id != id);
        let closed = state.positions.len() < before;
        if closed {
            info!(position_id = id, "Paper position closed");
        }
        Ok(closed)
    }

    async fn account_balance(&self) -> Result<Decimal, ExecutionError> {
        Ok(self.balance)
    }

    fn name(&self) -> &str {
        "Paper Broker"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use trading_core::types::Side;

    #[tokio::test]
    async fn test_paper_order_opens_position() {
        let broker = PaperBroker::new(dec!(10000));

        let request = OrderRequest::new("EURUSD", Side::Buy, dec!(0.5), dec!(20), dec!(40));
        let handle = broker.place_order(request).await.unwrap();

        assert_eq!(handle.status, OrderStatus::Filled);
        assert!(handle.is_confirmed());

        let positions = broker.list_open_positions(Some("EURUSD")).await.unwrap();
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].id, handle.id.to_string());
        assert!(broker.list_open_positions(Some("GBPUSD")).await.unwrap().is_empty());
        assert_eq!(broker.orders().await.len(), 1);
    }

    #[tokio::test]
    async fn test_paper_rejects_invalid_orders() {
        let broker = PaperBroker::new(dec!(10000));

        let zero = OrderRequest::new("EURUSD", Side::Sell, Decimal::ZERO, dec!(20), dec!(40));
        assert!(matches!(
            broker.place_order(zero).await,
            Err(ExecutionError::Rejected(_))
        ));

        let no_stop = OrderRequest::new("EURUSD", Side::Sell, dec!(1), Decimal::ZERO, dec!(40));
        assert!(broker.place_order(no_stop).await.is_err());

        assert!(broker.list_open_positions(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_paper_close_position() {
        let broker = PaperBroker::new(dec!(10000));

        let first = broker
            .place_order(OrderRequest::new("EURUSD", Side::Buy, dec!(1), dec!(10), dec!(20)))
            .await
            .unwrap();
        broker
            .place_order(OrderRequest::new("USDJPY", Side::Sell, dec!(1), dec!(10), dec!(20)))
            .await
            .unwrap();

        assert!(broker.close_position(&first.id.to_string()).await.unwrap());
        assert!(!broker.close_position(&first.id.to_string()).await.unwrap());
        assert!(!broker.close_position("unknown").await.unwrap());

        let open = broker.list_open_positions(None).await.unwrap();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].instrument, "USDJPY");
        assert_eq!(broker.account_balance().await.unwrap(), dec!(10000));
    }
}
