use chrono::{NaiveDate, NaiveTime};

/// Format a countdown in minutes as "Xh Ym"
pub fn format_countdown(minutes: u16) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Format the live clock face, e.g. "6:05:09 PM"
pub fn format_clock(t: NaiveTime) -> String {
    t.format("%-I:%M:%S %p").to_string()
}

/// Long Gregorian date, e.g. "Friday, March 7, 2025"
pub fn gregorian_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_always_shows_hours() {
        assert_eq!(format_countdown(0), "0h 0m");
        assert_eq!(format_countdown(59), "0h 59m");
        assert_eq!(format_countdown(125), "2h 5m");
    }

    #[test]
    fn clock_and_date_labels() {
        let t = NaiveTime::from_hms_opt(18, 5, 9).unwrap();
        assert_eq!(format_clock(t), "6:05:09 PM");
        let d = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(gregorian_label(d), "Friday, March 7, 2025");
    }
}
