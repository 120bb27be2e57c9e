use serde::Serialize;

use crate::models::{ClockTime, PrayerRow, PrayerType};
use crate::utils::format::format_countdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NextEvent {
    Upcoming { prayer: PrayerType, minutes: u16 },
    /// Nothing left today. Tomorrow's Fajr is not looked up, so there is no countdown.
    FajrTomorrow,
}

impl NextEvent {
    pub fn label(&self) -> String {
        match self {
            NextEvent::Upcoming { prayer, minutes } => {
                format!("Next: {} in {}", prayer.display_name(), format_countdown(*minutes))
            }
            NextEvent::FajrTomorrow => "Next: Fajr (Tomorrow)".to_string(),
        }
    }
}

/// Athan times to scan: the five daily prayers, then Jummah when today is Friday.
pub fn schedule(
    today: &PrayerRow,
    friday: Option<&PrayerRow>,
) -> Vec<(PrayerType, Option<ClockTime>)> {
    let mut list: Vec<_> = PrayerType::daily()
        .into_iter()
        .map(|p| (p, today.athan(p)))
        .collect();
    if today.is_friday() {
        list.push((PrayerType::Jummah, friday.and_then(|f| f.jummah)));
    }
    list
}

/// First entry strictly after `now`. An athan equal to `now` counts as passed.
pub fn next_event(schedule: &[(PrayerType, Option<ClockTime>)], now: ClockTime) -> NextEvent {
    schedule
        .iter()
        .find_map(|(prayer, athan)| {
            let minutes = now.minutes_until((*athan)?)?;
            Some(NextEvent::Upcoming {
                prayer: *prayer,
                minutes,
            })
        })
        .unwrap_or(NextEvent::FajrTomorrow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> Option<ClockTime> {
        ClockTime::from_hm(h, m)
    }

    fn sample() -> Vec<(PrayerType, Option<ClockTime>)> {
        vec![
            (PrayerType::Fajr, hm(5, 0)),
            (PrayerType::Dhuhr, hm(12, 30)),
            (PrayerType::Asr, hm(15, 45)),
            (PrayerType::Maghrib, hm(18, 10)),
            (PrayerType::Isha, hm(19, 30)),
        ]
    }

    #[test]
    fn after_isha_rolls_over_to_tomorrow() {
        let next = next_event(&sample(), hm(20, 0).unwrap());
        assert_eq!(next, NextEvent::FajrTomorrow);
        assert_eq!(next.label(), "Next: Fajr (Tomorrow)");
    }

    #[test]
    fn equal_time_is_already_past() {
        let next = next_event(&sample(), hm(5, 0).unwrap());
        assert_eq!(
            next,
            NextEvent::Upcoming {
                prayer: PrayerType::Dhuhr,
                minutes: 450
            }
        );
        assert_eq!(next.label(), "Next: Dhuhr in 7h 30m");
    }

    #[test]
    fn before_fajr_counts_down_to_fajr() {
        let next = next_event(&sample(), hm(4, 15).unwrap());
        assert_eq!(next.label(), "Next: Fajr in 0h 45m");
    }

    #[test]
    fn null_athans_are_skipped() {
        let mut list = sample();
        list[1].1 = None;
        let next = next_event(&list, hm(12, 0).unwrap());
        assert_eq!(
            next,
            NextEvent::Upcoming {
                prayer: PrayerType::Asr,
                minutes: 225
            }
        );
        assert_eq!(next_event(&[(PrayerType::Fajr, None)], hm(0, 0).unwrap()), NextEvent::FajrTomorrow);
    }

    #[test]
    fn jummah_appended_only_on_friday() {
        use chrono::NaiveDate;
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let mut friday = PrayerRow::empty(date, "Friday");
        friday.jummah = hm(13, 15);
        let thursday = PrayerRow::empty(date, "Thursday");

        let on_friday = schedule(&friday, Some(&friday));
        assert_eq!(on_friday.len(), 6);
        assert_eq!(on_friday[5], (PrayerType::Jummah, hm(13, 15)));
        assert_eq!(schedule(&thursday, Some(&friday)).len(), 5);
    }
}
