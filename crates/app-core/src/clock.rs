//! Wall-clock source
//!
//! The UI engine never reads the clock itself. The transport layer asks a
//! [`Clock`] for the current local time once per request and passes it in.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone};

/// Source of the current local time
pub trait Clock: Send + Sync {
    /// Current local time with its UTC offset
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Reads the host's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().into()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    /// Pin the clock to `instant`
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }

    /// Parse an RFC 3339 timestamp such as `2025-03-14T12:30:00+00:00`
    pub fn from_rfc3339(s: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(s).map(Self::new)
    }

    /// A UTC instant on a fixed date at `hour:minute`
    ///
    /// Returns `None` when the hour or minute is out of range.
    pub fn at(hour: u32, minute: u32) -> Option<Self> {
        let naive = NaiveDate::from_ymd_opt(2025, 1, 15)?.and_hms_opt(hour, minute, 0)?;
        let utc = FixedOffset::east_opt(0)?;
        utc.from_local_datetime(&naive).single().map(Self::new)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}
