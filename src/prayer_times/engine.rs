use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::next_event::{next_event, schedule, NextEvent};
use super::window::{active_prayers, HighlightPolicy};
use crate::config::DisplayConfig;
use crate::models::{ClockTime, PrayerType, TimeFormat};
use crate::timetable::TimeTable;
use crate::utils::format::gregorian_label;
use crate::utils::hijri::{conversion_date, hijri_label};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrayerCard {
    pub prayer: PrayerType,
    pub iqama: Option<String>,
    /// "Athan at 5:07"
    pub athan_label: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JummahInfo {
    /// `None` when the table has no Friday row (shown as unavailable).
    pub time: Option<String>,
    pub date: Option<NaiveDate>,
    pub active: bool,
}

/// Everything the display shows for one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrayerBoard {
    pub date: NaiveDate,
    pub gregorian: String,
    pub hijri: Option<String>,
    pub cards: Vec<PrayerCard>,
    pub sunrise: Option<String>,
    pub jummah: JummahInfo,
    pub next: NextEvent,
    pub next_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Board {
    /// The table has no row for today.
    NoData { date: NaiveDate, gregorian: String },
    Ready(Box<PrayerBoard>),
}

#[derive(Debug, Clone, Copy)]
pub struct PrayerTimeEngine {
    policy: HighlightPolicy,
    time_format: TimeFormat,
    hijri_offset: i32,
}

impl PrayerTimeEngine {
    pub fn new(display: &DisplayConfig, time_format: TimeFormat) -> Self {
        Self {
            policy: display.highlight,
            time_format,
            hijri_offset: display.hijri_offset,
        }
    }

    pub fn compute(&self, table: &TimeTable, now: NaiveDateTime) -> Board {
        let date = now.date();
        let clock = ClockTime::from(now.time());

        let Some(today) = table.find_row(date) else {
            log::warn!("No timetable row for {}", date);
            return Board::NoData {
                date,
                gregorian: gregorian_label(date),
            };
        };

        let friday = table
            .friday_on_or_after(date)
            .or_else(|| table.find_next_friday());
        if friday.is_none() {
            log::warn!("Timetable has no Friday row; Jummah unavailable");
        }

        let active = active_prayers(today, friday, clock, self.policy);
        let fmt = |t: Option<ClockTime>| t.map(|t| self.time_format.format(t));

        let cards = PrayerType::daily()
            .into_iter()
            .map(|prayer| PrayerCard {
                prayer,
                iqama: fmt(today.iqama(prayer)),
                athan_label: fmt(today.athan(prayer)).map(|t| format!("Athan at {}", t)),
                active: active.contains(&prayer),
            })
            .collect();

        let jummah = JummahInfo {
            time: fmt(friday.and_then(|f| f.jummah)),
            date: friday.map(|f| f.date),
            active: active.contains(&PrayerType::Jummah),
        };

        let next = next_event(&schedule(today, friday), clock);
        let hijri_date = conversion_date(date, today.maghrib.athan, clock);

        Board::Ready(Box::new(PrayerBoard {
            date,
            gregorian: gregorian_label(date),
            hijri: hijri_label(hijri_date, self.hijri_offset),
            cards,
            sunrise: fmt(today.sunrise),
            jummah,
            next_label: next.label(),
            next,
        }))
    }
}
