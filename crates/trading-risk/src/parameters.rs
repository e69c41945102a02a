//! Per-trade and per-instrument risk parameters.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use trading_core::error::RiskError;

use crate::RiskSizer;

/// Risk settings applied to every instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskParameters {
    /// Fraction of the balance risked per trade, in (0, 1]
    pub risk_fraction: Decimal,
    /// Maximum simultaneously open trades per instrument
    pub max_concurrent_per_instrument: usize,
    /// Value of one pip per lot
    pub pip_value: Decimal,
}

impl Default for RiskParameters {
    fn default() -> Self {
        Self {
            risk_fraction: dec!(0.01),
            max_concurrent_per_instrument: 1,
            pip_value: RiskSizer::DEFAULT_PIP_VALUE,
        }
    }
}

impl RiskParameters {
    /// Check that the parameters can drive the sizer and admission control.
    pub fn validate(&self) -> Result<(), RiskError> {
        if self.risk_fraction <= Decimal::ZERO || self.risk_fraction > Decimal::ONE {
            return Err(RiskError::InvalidInput {
                field: "risk_fraction",
                value: self.risk_fraction,
            });
        }
        if self.max_concurrent_per_instrument == 0 {
            return Err(RiskError::InvalidInput {
                field: "max_concurrent_per_instrument",
                value: Decimal::ZERO,
            });
        }
        self.sizer().map(|_| ())
    }

    /// Build the sizer for these parameters.
    pub fn sizer(&self) -> Result<RiskSizer, RiskError> {
        RiskSizer::new(self.pip_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = RiskParameters::default();
        assert_eq!(params.risk_fraction, dec!(0.01));
        assert_eq!(params.max_concurrent_per_instrument, 1);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let params = RiskParameters {
            risk_fraction: dec!(1.5),
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = RiskParameters {
            max_concurrent_per_instrument: 0,
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = RiskParameters {
            pip_value: dec!(-10),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(RiskError::InvalidInput { field: "pip_value", .. })
        ));
    }
}
