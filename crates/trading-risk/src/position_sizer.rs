//! Lot sizing from account balance and stop distance.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use trading_core::error::RiskError;

/// Placeholder risk-based lot sizer.
///
/// `size = (balance * risk_fraction) / (stop_distance * pip_value)`, rounded
/// to two decimal places.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskSizer {
    pip_value: Decimal,
}

impl RiskSizer {
    /// Value of one pip per lot used by [`RiskSizer::default`].
    pub const DEFAULT_PIP_VALUE: Decimal = dec!(10);

    /// Lot sizes are quoted with this many decimals.
    pub const PRECISION: u32 = 2;

    /// Create a sizer with a custom pip value.
    pub fn new(pip_value: Decimal) -> Result<Self, RiskError> {
        if pip_value <= Decimal::ZERO {
            return Err(RiskError::InvalidInput {
                field: "pip_value",
                value: pip_value,
            });
        }
        Ok(Self { pip_value })
    }

    /// Calculate the lot size for one trade.
    ///
    /// # Arguments
    /// * `balance` - Account balance, must be non-negative
    /// * `risk_fraction` - Fraction of the balance at risk, in (0, 1]
    /// * `stop_distance` - Stop distance in pips, must be positive
    pub fn size(
        &self,
        balance: Decimal,
        risk_fraction: Decimal,
        stop_distance: Decimal,
    ) -> Result<Decimal, RiskError> {
        if stop_distance <= Decimal::ZERO {
            return Err(RiskError::InvalidInput {
                field: "stop_distance",
                value: stop_distance,
            });
        }
        if balance < Decimal::ZERO {
            return Err(RiskError::InvalidInput {
                field: "balance",
                value: balance,
            });
        }
        if risk_fraction <= Decimal::ZERO || risk_fraction > Decimal::ONE {
            return Err(RiskError::InvalidInput {
                field: "risk_fraction",
                value: risk_fraction,
            });
        }

        let overflow = || RiskError::InvalidInput {
            field: "balance",
            value: balance,
        };
        let risk_amount = balance.checked_mul(risk_fraction).ok_or_else(overflow)?;
        let risk_per_lot = stop_distance
            .checked_mul(self.pip_value)
            .ok_or(RiskError::InvalidInput {
                field: "stop_distance",
                value: stop_distance,
            })?;
        let lots = risk_amount.checked_div(risk_per_lot).ok_or_else(overflow)?;

        Ok(lots.round_dp_with_strategy(Self::PRECISION, RoundingStrategy::MidpointNearestEven))
    }
}

impl Default for RiskSizer {
    fn default() -> Self {
        Self {
            pip_value: Self::DEFAULT_PIP_VALUE,
        }
    }
}
