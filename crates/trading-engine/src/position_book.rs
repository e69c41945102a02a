//! Open-trade counts per instrument.

use std::collections::HashMap;
use trading_core::types::Position;

/// Number of open trades per configured instrument.
///
/// Counts only change in response to confirmed execution events.
#[derive(Debug, Clone, Default)]
pub struct PositionBook {
    counts: HashMap<String, usize>,
}

impl PositionBook {
    /// Book with a zero count for every instrument.
    pub fn new<'a>(instruments: impl IntoIterator<Item = &'a String>) -> Self {
        Self {
            counts: instruments.into_iter().map(|i| (i.clone(), 0)).collect(),
        }
    }

    /// Open trades for `instrument` (0 for untracked instruments).
    pub fn open_count(&self, instrument: &str) -> usize {
        self.counts.get(instrument).copied().unwrap_or(0)
    }

    /// Whether `instrument` has reached `cap` open trades.
    pub fn is_at_capacity(&self, instrument: &str, cap: usize) -> bool {
        self.open_count(instrument) >= cap
    }

    /// Record a confirmed open trade.
    pub fn record_open(&mut self, instrument: &str) {
        *self.counts.entry(instrument.to_string()).or_insert(0) += 1;
    }

    /// Replace all counts with the positions reported by the execution layer.
    ///
    /// Returns the instruments that have open positions but are not tracked.
    pub fn reconcile(&mut self, positions: &[Position]) -> Vec<String> {
        for count in self.counts.values_mut() {
            *count = 0;
        }

        let mut untracked = Vec::new();
        for position in positions {
            match self.counts.get_mut(&position.instrument) {
                Some(count) => *count += 1,
                None => {
                    if !untracked.contains(&position.instrument) {
                        untracked.push(position.instrument.clone());
                    }
                }
            }
        }
        untracked
    }

    /// Total open trades across all instruments.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use trading_core::types::{OrderHandle, OrderRequest, OrderStatus, Side};

    fn position(instrument: &str) -> Position {
        let request = OrderRequest::new(instrument, Side::Buy, dec!(0.1), dec!(20), dec!(40));
        let handle = OrderHandle::from_request(&request, OrderStatus::Filled);
        Position::opened_by(&handle, &request)
    }

    fn instruments() -> Vec<String> {
        vec!["EURUSD".to_string(), "GBPUSD".to_string()]
    }

    #[test]
    fn test_starts_at_zero() {
        let book = PositionBook::new(&instruments());
        assert_eq!(book.open_count("EURUSD"), 0);
        assert_eq!(book.open_count("XAUUSD"), 0);
        assert_eq!(book.total(), 0);
        assert!(!book.is_at_capacity("EURUSD", 1));
    }

    #[test]
    fn test_record_open() {
        let mut book = PositionBook::new(&instruments());
        book.record_open("EURUSD");

        assert_eq!(book.open_count("EURUSD"), 1);
        assert!(book.is_at_capacity("EURUSD", 1));
        assert!(!book.is_at_capacity("EURUSD", 2));
    }

    #[test]
    fn test_reconcile_replaces_counts() {
        let mut book = PositionBook::new(&instruments());
        book.record_open("EURUSD");
        book.record_open("EURUSD");

        let untracked = book.reconcile(&[
            position("GBPUSD"),
            position("GBPUSD"),
            position("XAUUSD"),
            position("XAUUSD"),
        ]);

        assert_eq!(book.open_count("EURUSD"), 0);
        assert_eq!(book.open_count("GBPUSD"), 2);
        assert_eq!(book.open_count("XAUUSD"), 0);
        assert_eq!(untracked, vec!["XAUUSD".to_string()]);
    }
}
