//! Trading session window.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time-of-day range (UTC) during which the orchestrator polls.
///
/// Both bounds are inclusive. A window whose start is after its end wraps
/// past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl SessionWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Parse a window from `HH:MM` or `HH:MM:SS` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, String> {
        Ok(Self::new(parse_time(start)?, parse_time(end)?))
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Whether `time` falls inside the window.
    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.start <= self.end {
            self.start <= time && time <= self.end
        } else {
            time >= self.start || time <= self.end
        }
    }

    /// Whether the instant `now` falls inside the window.
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        self.contains(now.time())
    }
}

impl Default for SessionWindow {
    /// London / New York overlap, 08:00-12:00 UTC.
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default(),
        }
    }
}

impl fmt::Display for SessionWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} UTC",
            self.start.format("%H:%M:%S"),
            self.end.format("%H:%M:%S")
        )
    }
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| format!("Invalid time of day '{}': {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_inclusive_bounds() {
        let window = SessionWindow::parse("08:00", "12:00").unwrap();

        assert!(!window.contains(t(7, 59, 0)));
        assert!(!window.contains(t(7, 59, 59)));
        assert!(window.contains(t(8, 0, 0)));
        assert!(window.contains(t(10, 30, 0)));
        assert!(window.contains(t(12, 0, 0)));
        assert!(!window.contains(t(12, 0, 1)));
    }

    #[test]
    fn test_overnight_window() {
        let window = SessionWindow::parse("22:00", "02:00").unwrap();

        assert!(window.contains(t(23, 0, 0)));
        assert!(window.contains(t(0, 0, 0)));
        assert!(window.contains(t(2, 0, 0)));
        assert!(!window.contains(t(12, 0, 0)));
    }

    #[test]
    fn test_is_open_at() {
        let window = SessionWindow::default();
        let open = Utc.with_ymd_and_hms(2024, 3, 4, 9, 15, 0).unwrap();
        let closed = Utc.with_ymd_and_hms(2024, 3, 4, 18, 0, 0).unwrap();

        assert!(window.is_open_at(open));
        assert!(!window.is_open_at(closed));
    }

    #[test]
    fn test_parse() {
        let window = SessionWindow::parse("08:30:15", " 16:00 ").unwrap();
        assert_eq!(window.start(), t(8, 30, 15));
        assert_eq!(window.end(), t(16, 0, 0));
        assert_eq!(window.to_string(), "08:30:15-16:00:00 UTC");

        assert!(SessionWindow::parse("25:00", "12:00").is_err());
        assert!(SessionWindow::parse("morning", "12:00").is_err());
    }
}
