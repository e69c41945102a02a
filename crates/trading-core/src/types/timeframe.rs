//! Bar timeframes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timeframe for bars/candles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Timeframe {
    #[serde(rename = "1m")]
    Minute1,
    #[serde(rename = "5m")]
    Minute5,
    #[serde(rename = "15m")]
    Minute15,
    #[serde(rename = "30m")]
    Minute30,
    #[serde(rename = "1h")]
    #[default]
    Hour1,
    #[serde(rename = "4h")]
    Hour4,
    #[serde(rename = "1d")]
    Daily,
    #[serde(rename = "1w")]
    Weekly,
    #[serde(rename = "1M")]
    Monthly,
}

impl Timeframe {
    /// Short code used in file names and logs.
    pub fn code(&self) -> &'static str {
        match self {
            Timeframe::Minute1 => "1m",
            Timeframe::Minute5 => "5m",
            Timeframe::Minute15 => "15m",
            Timeframe::Minute30 => "30m",
            Timeframe::Hour1 => "1h",
            Timeframe::Hour4 => "4h",
            Timeframe::Daily => "1d",
            Timeframe::Weekly => "1w",
            Timeframe::Monthly => "1M",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    /// Accepts the short codes (`1h`) as well as broker-style names (`H1`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case matters only for month vs minute.
        if matches!(s, "1M" | "MN" | "MN1") {
            return Ok(Timeframe::Monthly);
        }

        match s.to_lowercase().as_str() {
            "1m" | "m1" | "1min" => Ok(Timeframe::Minute1),
            "5m" | "m5" | "5min" => Ok(Timeframe::Minute5),
            "15m" | "m15" | "15min" => Ok(Timeframe::Minute15),
            "30m" | "m30" | "30min" => Ok(Timeframe::Minute30),
            "1h" | "h1" | "hour" => Ok(Timeframe::Hour1),
            "4h" | "h4" => Ok(Timeframe::Hour4),
            "1d" | "d1" | "d" | "daily" => Ok(Timeframe::Daily),
            "1w" | "w1" | "w" | "weekly" => Ok(Timeframe::Weekly),
            "monthly" => Ok(Timeframe::Monthly),
            _ => Err(format!("Invalid timeframe: {}", s)),
        }
    }
}
