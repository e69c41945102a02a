//! Trade decisions produced by signal sources.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Side;

/// Direction of a trade decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
    #[default]
    None,
}

impl Direction {
    /// Order side for this direction, `None` when there is nothing to trade.
    pub fn side(&self) -> Option<Side> {
        match self {
            Direction::Long => Some(Side::Buy),
            Direction::Short => Some(Side::Sell),
            Direction::None => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => write!(f, "BUY"),
            Direction::Short => write!(f, "SELL"),
            Direction::None => write!(f, "NONE"),
        }
    }
}

/// A trade decision for one instrument.
///
/// Distances are in price units of the instrument (pips for FX).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Signal {
    pub direction: Direction,
    pub stop_distance: Decimal,
    pub target_distance: Decimal,
    /// Optional confidence score in [0, 1]
    pub confidence: Option<f64>,
}

impl Signal {
    /// The "nothing to do" decision.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn long(stop_distance: Decimal, target_distance: Decimal) -> Self {
        Self {
            direction: Direction::Long,
            stop_distance,
            target_distance,
            confidence: None,
        }
    }

    pub fn short(stop_distance: Decimal, target_distance: Decimal) -> Self {
        Self {
            direction: Direction::Short,
            stop_distance,
            target_distance,
            confidence: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Whether the decision should be forwarded to execution.
    #[inline]
    pub fn is_actionable(&self) -> bool {
        self.direction != Direction::None
    }
}
