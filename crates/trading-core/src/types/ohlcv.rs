//! OHLCV (Open, High, Low, Close, Volume) data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::Timeframe;

/// A single price bar.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bar {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded (or tick) volume
    pub volume: f64,
}

impl Bar {
    /// Create a new bar.
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// The bar's range (high - low).
    #[inline]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Timestamp as a UTC datetime, `None` when out of range.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// Bars for one instrument and timeframe, ordered oldest to newest.
#[derive(Debug, Clone)]
pub struct BarSeries {
    pub symbol: String,
    pub timeframe: Timeframe,
    bars: VecDeque<Bar>,
    /// Maximum number of bars kept (0 = unlimited)
    capacity: usize,
}

impl BarSeries {
    /// Create a new empty bar series.
    pub fn new(symbol: impl Into<String>, timeframe: Timeframe) -> Self {
        Self::with_capacity(symbol, timeframe, 0)
    }

    /// Create a bar series that keeps at most `capacity` bars.
    /// When capacity is reached, the oldest bar is dropped.
    pub fn with_capacity(symbol: impl Into<String>, timeframe: Timeframe, capacity: usize) -> Self {
        Self {
            symbol: symbol.into(),
            timeframe,
            bars: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a bar, dropping the oldest if at capacity.
    pub fn push(&mut self, bar: Bar) {
        if self.capacity > 0 && self.bars.len() >= self.capacity {
            self.bars.pop_front();
        }
        self.bars.push_back(bar);
    }

    pub fn extend(&mut self, bars: impl IntoIterator<Item = Bar>) {
        for bar in bars {
            self.push(bar);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Most recent bar.
    pub fn last(&self) -> Option<&Bar> {
        self.bars.back()
    }

    /// Bar by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    /// Close prices, oldest first.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter()
    }
}
