//! Presentation modes
//!
//! A [`Mode`] is the discrete look-and-layout variant selected for a
//! request. Today it is derived only from the local hour; the seven
//! half-open intervals below partition the 24-hour clock.
//!
//! | Hours        | Mode         |
//! |--------------|--------------|
//! | `[0, 6)`     | `late_night` |
//! | `[6, 9)`     | `morning`    |
//! | `[9, 12)`    | `day`        |
//! | `[12, 14)`   | `flash_sale` |
//! | `[14, 17)`   | `afternoon`  |
//! | `[17, 20)`   | `evening`    |
//! | `[20, 24)`   | `night`      |

use chrono::{DateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

/// Time-of-day presentation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// 12AM - 6AM: minimal midnight browsing
    LateNight,
    /// 6AM - 9AM: morning deals
    Morning,
    /// 9AM - 12PM: standard shopping
    #[default]
    Day,
    /// 12PM - 2PM: lunch hour flash sale
    FlashSale,
    /// 2PM - 5PM: productive browsing
    Afternoon,
    /// 5PM - 8PM: evening collections
    Evening,
    /// 8PM - 12AM: night boutique
    Night,
}

impl Mode {
    /// Every mode in clock order
    pub const ALL: [Mode; 7] = [
        Mode::LateNight,
        Mode::Morning,
        Mode::Day,
        Mode::FlashSale,
        Mode::Afternoon,
        Mode::Evening,
        Mode::Night,
    ];

    /// Mode for a local hour in `0..24`
    ///
    /// Hours outside that range are a caller bug; release builds map them to
    /// [`Mode::Day`].
    pub fn for_hour(hour: u32) -> Mode {
        debug_assert!(hour < 24, "hour out of range: {}", hour);
        match hour {
            0..=5 => Mode::LateNight,
            6..=8 => Mode::Morning,
            9..=11 => Mode::Day,
            12..=13 => Mode::FlashSale,
            14..=16 => Mode::Afternoon,
            17..=19 => Mode::Evening,
            20..=23 => Mode::Night,
            _ => Mode::Day,
        }
    }

    /// Mode for a timestamp, using its local hour
    pub fn resolve<Tz: TimeZone>(now: &DateTime<Tz>) -> Mode {
        Mode::for_hour(now.hour())
    }

    /// Parse a mode name, falling back to [`Mode::Day`] when unrecognized
    pub fn parse_or_default(s: &str) -> Mode {
        s.parse().unwrap_or_default()
    }

    /// Wire name (`late_night`, `flash_sale`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::LateNight => "late_night",
            Mode::Morning => "morning",
            Mode::Day => "day",
            Mode::FlashSale => "flash_sale",
            Mode::Afternoon => "afternoon",
            Mode::Evening => "evening",
            Mode::Night => "night",
        }
    }

    /// Half-open hour interval `[start, end)` this mode covers
    pub fn hours(&self) -> (u32, u32) {
        match self {
            Mode::LateNight => (0, 6),
            Mode::Morning => (6, 9),
            Mode::Day => (9, 12),
            Mode::FlashSale => (12, 14),
            Mode::Afternoon => (14, 17),
            Mode::Evening => (17, 20),
            Mode::Night => (20, 24),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str() == lowered)
            .ok_or_else(|| format!("Unknown mode: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    #[test]
    fn test_every_hour_maps_to_exactly_one_interval() {
        for hour in 0..24 {
            let mode = Mode::for_hour(hour);
            let containing: Vec<Mode> = Mode::ALL
                .into_iter()
                .filter(|m| {
                    let (start, end) = m.hours();
                    hour >= start && hour < end
                })
                .collect();
            assert_eq!(containing, vec![mode], "hour {}", hour);
        }
    }

    #[test]
    fn test_intervals_tile_the_clock() {
        let mut expected_start = 0;
        for mode in Mode::ALL {
            let (start, end) = mode.hours();
            assert_eq!(start, expected_start, "gap or overlap before {}", mode);
            assert!(end > start);
            expected_start = end;
        }
        assert_eq!(expected_start, 24);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(Mode::for_hour(0), Mode::LateNight);
        assert_eq!(Mode::for_hour(5), Mode::LateNight);
        assert_eq!(Mode::for_hour(6), Mode::Morning);
        assert_eq!(Mode::for_hour(9), Mode::Day);
        assert_eq!(Mode::for_hour(11), Mode::Day);
        assert_eq!(Mode::for_hour(12), Mode::FlashSale);
        assert_eq!(Mode::for_hour(14), Mode::Afternoon);
        assert_eq!(Mode::for_hour(17), Mode::Evening);
        assert_eq!(Mode::for_hour(20), Mode::Night);
        assert_eq!(Mode::for_hour(23), Mode::Night);
    }

    #[test]
    fn test_resolve_uses_local_hour() {
        let naive = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 15, 0)
            .unwrap();
        let plus_five = FixedOffset::east_opt(5 * 3600).unwrap();
        let local = plus_five.from_local_datetime(&naive).unwrap();
        assert_eq!(Mode::resolve(&local), Mode::FlashSale);

        // Same instant viewed in UTC is 07:15
        let utc = local.with_timezone(&chrono::Utc);
        assert_eq!(Mode::resolve(&utc), Mode::Morning);
    }

    #[test]
    fn test_display_and_from_str() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
        assert_eq!("FLASH_SALE".parse::<Mode>().unwrap(), Mode::FlashSale);
        assert!("brunch".parse::<Mode>().is_err());
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(Mode::parse_or_default("evening"), Mode::Evening);
        assert_eq!(Mode::parse_or_default("brunch"), Mode::Day);
        assert_eq!(Mode::parse_or_default(""), Mode::Day);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Mode::LateNight).unwrap();
        assert_eq!(json, "\"late_night\"");
        let parsed: Mode = serde_json::from_str("\"flash_sale\"").unwrap();
        assert_eq!(parsed, Mode::FlashSale);
    }
}
