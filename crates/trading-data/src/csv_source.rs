//! CSV file market data.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use trading_core::error::DataError;
use trading_core::traits::MarketData;
use trading_core::types::{Bar, Timeframe};

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp", alias = "time")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close", default)]
    close: Option<f64>,
    #[serde(rename = "Adj Close", default)]
    adj_close: Option<f64>,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// Market data read from a directory of CSV files.
///
/// Bars for an instrument are looked up in `<dir>/<INSTRUMENT>_<timeframe>.csv`
/// first, then `<dir>/<INSTRUMENT>.csv`. Files are re-read on every fetch so
/// an external process can keep appending to them.
pub struct CsvMarketData {
    dir: PathBuf,
}

impl CsvMarketData {
    /// Create a source reading from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, DataError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(DataError::unavailable(
                "*",
                format!("data directory {} does not exist", dir.display()),
            ));
        }
        Ok(Self { dir })
    }

    fn locate(&self, instrument: &str, timeframe: Timeframe) -> Option<PathBuf> {
        [
            self.dir.join(format!("{}_{}.csv", instrument, timeframe)),
            self.dir.join(format!("{}.csv", instrument)),
        ]
        .into_iter()
        .find(|p| p.is_file())
    }

    /// Load all bars from a file, sorted oldest to newest.
    fn load_from_path(&self, instrument: &str, path: &Path) -> Result<Vec<Bar>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| DataError::unavailable(instrument, e.to_string()))?;

        let mut bars = Vec::new();
        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::Parse(e.to_string()))?;
            let timestamp = parse_timestamp(&record.date)?;
            let close = record
                .close
                .or(record.adj_close)
                .ok_or_else(|| DataError::Parse(format!("no close price at {}", record.date)))?;

            bars.push(Bar::new(
                timestamp,
                record.open,
                record.high,
                record.low,
                close,
                record.volume,
            ));
        }

        bars.sort_by_key(|b| b.timestamp);
        Ok(bars)
    }
}

#[async_trait]
impl MarketData for CsvMarketData {
    async fn fetch_bars(
        &self,
        instrument: &str,
        timeframe: Timeframe,
        count: usize,
    ) -> Result<Vec<Bar>, DataError> {
        let path = self
            .locate(instrument, timeframe)
            .ok_or_else(|| DataError::InvalidInstrument(instrument.to_string()))?;

        let mut bars = self
            .load_from_path(instrument, &path)
            .map_err(|e| match e {
                DataError::Parse(reason) => DataError::unavailable(instrument, reason),
                other => other,
            })?;

        let start = bars.len().saturating_sub(count);
        let recent = bars.split_off(start);
        debug!(instrument, path = %path.display(), bars = recent.len(), "Loaded bars");
        Ok(recent)
    }

    fn name(&self) -> &str {
        "csv"
    }
}

/// Parse the supported timestamp formats into unix milliseconds.
fn parse_timestamp(date_str: &str) -> Result<i64, DataError> {
    let datetime_formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y.%m.%d %H:%M"];
    for format in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.and_utc().timestamp_millis());
        }
    }

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];
    for format in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            if let Some(dt) = d.and_hms_opt(0, 0, 0) {
                return Ok(dt.and_utc().timestamp_millis());
            }
        }
    }

    // Unix timestamp, milliseconds if more than 10 digits
    if let Ok(ts) = date_str.parse::<i64>() {
        if ts > 10_000_000_000 {
            return Ok(ts);
        }
        return ts
            .checked_mul(1000)
            .ok_or_else(|| DataError::Parse(format!("Timestamp out of range: {}", date_str)));
    }

    Err(DataError::Parse(format!("Could not parse date: {}", date_str)))
}
