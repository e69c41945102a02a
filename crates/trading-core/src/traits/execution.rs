//! Execution layer contract.

use crate::error::ExecutionError;
use crate::types::{OrderHandle, OrderRequest, Position};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Order placement and position management.
///
/// Any durable state (open positions, trade history) is owned by the
/// implementation, not by the orchestrator.
#[async_trait]
pub trait ExecutionPort: Send + Sync {
    /// Submit a market order with stop and target distances.
    ///
    /// # Returns
    /// A handle whose status tells whether the venue confirmed the order.
    /// A rejected order is reported as [`ExecutionError::Rejected`].
    async fn place_order(&self, request: OrderRequest) -> Result<OrderHandle, ExecutionError>;

    /// List open positions, optionally restricted to one instrument.
    async fn list_open_positions(
        &self,
        instrument: Option<&str>,
    ) -> Result<Vec<Position>, ExecutionError>;

    /// Close a position by id.
    ///
    /// # Returns
    /// `true` if a position was closed, `false` if none matched the id.
    async fn close_position(&self, id: &str) -> Result<bool, ExecutionError>;

    /// Current account balance in account currency.
    async fn account_balance(&self) -> Result<Decimal, ExecutionError>;

    /// Get the execution layer name.
    fn name(&self) -> &str;
}
