#![allow(dead_code)]
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time of day, stored as minutes since local midnight (0..=1439).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u16")]
pub struct ClockTime(u16);

impl ClockTime {
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self((hour * 60 + minute) as u16))
        } else {
            None
        }
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u32 {
        u32::from(self.0 / 60)
    }

    pub fn minute(self) -> u32 {
        u32::from(self.0 % 60)
    }

    pub fn to_naive(self) -> NaiveTime {
        // hour < 24 and minute < 60 by construction
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or(NaiveTime::MIN)
    }

    /// Minutes from `self` until `later`, or `None` if `later` is not after `self`.
    pub fn minutes_until(self, later: ClockTime) -> Option<u16> {
        later.0.checked_sub(self.0).filter(|m| *m > 0)
    }
}

impl From<NaiveTime> for ClockTime {
    /// Seconds are truncated.
    fn from(t: NaiveTime) -> Self {
        Self((t.hour() * 60 + t.minute()) as u16)
    }
}

impl From<ClockTime> for u16 {
    fn from(t: ClockTime) -> Self {
        t.0
    }
}

/// How clock cells are written in the timetable and on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    /// `H:MM`, hour 0-23
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    /// `H:MM AM`, hour 1-12
    #[serde(rename = "12h")]
    TwelveHour,
}

impl TimeFormat {
    /// Parse a cell. Blank or malformed cells are `None`, never an error.
    pub fn parse(self, raw: &str) -> Option<ClockTime> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        let pattern = match self {
            TimeFormat::TwentyFourHour => "%H:%M",
            TimeFormat::TwelveHour => "%I:%M %p",
        };
        match NaiveTime::parse_from_str(raw, pattern) {
            Ok(t) => Some(ClockTime::from(t)),
            Err(e) => {
                log::debug!("Ignoring unparseable time '{}': {}", raw, e);
                None
            }
        }
    }

    pub fn format(self, t: ClockTime) -> String {
        self.format_with(t, false)
    }

    /// Format with the hour zero-padded to two digits when `pad_hour` is set.
    pub fn format_with(self, t: ClockTime, pad_hour: bool) -> String {
        match (self, pad_hour) {
            (TimeFormat::TwentyFourHour, false) => format!("{}:{:02}", t.hour(), t.minute()),
            (TimeFormat::TwentyFourHour, true) => format!("{:02}:{:02}", t.hour(), t.minute()),
            (TimeFormat::TwelveHour, false) => t.to_naive().format("%-I:%M %p").to_string(),
            (TimeFormat::TwelveHour, true) => t.to_naive().format("%I:%M %p").to_string(),
        }
    }
}

/// Whether a time cell writes its hour with a leading zero (`05:07`).
pub fn has_padded_hour(raw: &str) -> bool {
    let Some((hour, _)) = raw.trim().split_once(':') else {
        return false;
    };
    hour.len() == 2 && hour.starts_with('0') && hour.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unpadded_24h() {
        let t = TimeFormat::TwentyFourHour.parse("6:30").unwrap();
        assert_eq!(t.minutes(), 390);
        assert_eq!(TimeFormat::TwentyFourHour.parse(" 18:05 ").unwrap().minutes(), 1085);
    }

    #[test]
    fn parses_12h_with_meridiem() {
        let fmt = TimeFormat::TwelveHour;
        assert_eq!(fmt.parse("6:30 PM").unwrap().minutes(), 18 * 60 + 30);
        assert_eq!(fmt.parse("12:05 AM").unwrap().minutes(), 5);
        assert_eq!(fmt.parse("12:30 pm").unwrap().minutes(), 12 * 60 + 30);
        assert_eq!(fmt.parse("5:07AM").unwrap().minutes(), 5 * 60 + 7);
        assert_eq!(fmt.parse("11:45pm").unwrap().minutes(), 23 * 60 + 45);
    }

    #[test]
    fn malformed_cells_are_none() {
        let fmt = TimeFormat::TwentyFourHour;
        assert_eq!(fmt.parse(""), None);
        assert_eq!(fmt.parse("   "), None);
        assert_eq!(fmt.parse("-"), None);
        assert_eq!(fmt.parse("25:00"), None);
        assert_eq!(fmt.parse("noon"), None);
    }

    #[test]
    fn canonical_strings_survive_reformatting() {
        for raw in ["0:00", "5:07", "12:30", "23:59"] {
            let fmt = TimeFormat::TwentyFourHour;
            assert_eq!(fmt.format(fmt.parse(raw).unwrap()), raw);
        }
        for raw in ["12:00 AM", "5:07 AM", "12:30 PM", "11:59 PM"] {
            let fmt = TimeFormat::TwelveHour;
            assert_eq!(fmt.format(fmt.parse(raw).unwrap()), raw);
        }
    }

    #[test]
    fn padded_hours_are_detected_and_written_back() {
        assert!(has_padded_hour("05:07"));
        assert!(has_padded_hour(" 00:15 "));
        assert!(has_padded_hour("09:30 PM"));
        assert!(!has_padded_hour("5:07"));
        assert!(!has_padded_hour("12:30"));
        assert!(!has_padded_hour("Friday"));
        assert!(!has_padded_hour("07-03-2025"));

        let t = ClockTime::from_hm(5, 7).unwrap();
        assert_eq!(TimeFormat::TwentyFourHour.format_with(t, true), "05:07");
        assert_eq!(TimeFormat::TwelveHour.format_with(t, true), "05:07 AM");
        let late = ClockTime::from_hm(18, 22).unwrap();
        assert_eq!(TimeFormat::TwentyFourHour.format_with(late, true), "18:22");
    }

    #[test]
    fn minutes_until_is_strict() {
        let a = ClockTime::from_hm(5, 0).unwrap();
        let b = ClockTime::from_hm(6, 15).unwrap();
        assert_eq!(a.minutes_until(b), Some(75));
        assert_eq!(a.minutes_until(a), None);
        assert_eq!(b.minutes_until(a), None);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(ClockTime::from_minutes(1440).is_none());
        assert!(ClockTime::from_hm(24, 0).is_none());
        assert_eq!(ClockTime::from_minutes(1439).unwrap().to_naive().to_string(), "23:59:00");
    }
}
