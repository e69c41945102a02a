//! Market data contract.

use crate::error::DataError;
use crate::types::{Bar, Timeframe};
use async_trait::async_trait;

/// Source of recent price bars.
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Fetch the most recent bars for an instrument.
    ///
    /// # Arguments
    /// * `instrument` - Broker-namespaced symbol
    /// * `timeframe` - The bar timeframe
    /// * `count` - Maximum number of bars to return
    ///
    /// # Returns
    /// At most `count` bars, ordered from oldest to newest. Fails with
    /// [`DataError::Unavailable`] on transport or storage errors and with
    /// [`DataError::InvalidInstrument`] when the symbol is unknown.
    async fn fetch_bars(
        &self,
        instrument: &str,
        timeframe: Timeframe,
        count: usize,
    ) -> Result<Vec<Bar>, DataError>;

    /// Get the data source name.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBars(Vec<Bar>);

    #[async_trait]
    impl MarketData for FixedBars {
        async fn fetch_bars(
            &self,
            instrument: &str,
            _timeframe: Timeframe,
            count: usize,
        ) -> Result<Vec<Bar>, DataError> {
            if instrument != "EURUSD" {
                return Err(DataError::InvalidInstrument(instrument.to_string()));
            }
            let start = self.0.len().saturating_sub(count);
            Ok(self.0[start..].to_vec())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let bars = (0..5).map(|i| Bar::new(i, 1.0, 1.0, 1.0, 1.0, 0.0)).collect();
        let source: Box<dyn MarketData> = Box::new(FixedBars(bars));

        let recent = source.fetch_bars("EURUSD", Timeframe::Hour1, 2).await.unwrap();
        assert_eq!(recent.iter().map(|b| b.timestamp).collect::<Vec<_>>(), vec![3, 4]);

        let err = source.fetch_bars("XAUUSD", Timeframe::Hour1, 2).await.unwrap_err();
        assert_eq!(err, DataError::InvalidInstrument("XAUUSD".to_string()));
    }
}
