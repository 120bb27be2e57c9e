#![allow(dead_code)]
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::clock::ClockTime;
use crate::timetable::TableFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerType {
    Fajr,
    #[serde(alias = "zuhr")]
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
    #[serde(alias = "jumuah")]
    Jummah,
}

impl PrayerType {
    /// The five daily prayers in chronological order.
    pub fn daily() -> [PrayerType; 5] {
        [
            PrayerType::Fajr,
            PrayerType::Dhuhr,
            PrayerType::Asr,
            PrayerType::Maghrib,
            PrayerType::Isha,
        ]
    }

    /// Every card on the board, Jummah last.
    pub fn all() -> [PrayerType; 6] {
        [
            PrayerType::Fajr,
            PrayerType::Dhuhr,
            PrayerType::Asr,
            PrayerType::Maghrib,
            PrayerType::Isha,
            PrayerType::Jummah,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerType::Fajr => "Fajr",
            PrayerType::Dhuhr => "Dhuhr",
            PrayerType::Asr => "Asr",
            PrayerType::Maghrib => "Maghrib",
            PrayerType::Isha => "Isha",
            PrayerType::Jummah => "Jummah",
        }
    }
}

impl std::str::FromStr for PrayerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fajr" => Ok(PrayerType::Fajr),
            "dhuhr" | "zuhr" => Ok(PrayerType::Dhuhr),
            "asr" => Ok(PrayerType::Asr),
            "maghrib" => Ok(PrayerType::Maghrib),
            "isha" => Ok(PrayerType::Isha),
            "jummah" | "jumuah" => Ok(PrayerType::Jummah),
            other => Err(format!("Unknown prayer: {}", other)),
        }
    }
}

impl std::fmt::Display for PrayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrayerSlot {
    pub athan: Option<ClockTime>,
    pub iqama: Option<ClockTime>,
}

/// One calendar day of the timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerRow {
    pub date: NaiveDate,
    pub day_name: String,
    pub fajr: PrayerSlot,
    pub sunrise: Option<ClockTime>,
    pub dhuhr: PrayerSlot,
    pub jummah: Option<ClockTime>,
    pub asr: PrayerSlot,
    pub maghrib: PrayerSlot,
    pub isha: PrayerSlot,
}

impl PrayerRow {
    /// A row with every time missing.
    pub fn empty(date: NaiveDate, day_name: impl Into<String>) -> Self {
        Self {
            date,
            day_name: day_name.into(),
            fajr: PrayerSlot::default(),
            sunrise: None,
            dhuhr: PrayerSlot::default(),
            jummah: None,
            asr: PrayerSlot::default(),
            maghrib: PrayerSlot::default(),
            isha: PrayerSlot::default(),
        }
    }

    /// Jummah has its own single column; its slot carries it as the athan.
    pub fn slot(&self, prayer: PrayerType) -> PrayerSlot {
        match prayer {
            PrayerType::Fajr => self.fajr,
            PrayerType::Dhuhr => self.dhuhr,
            PrayerType::Asr => self.asr,
            PrayerType::Maghrib => self.maghrib,
            PrayerType::Isha => self.isha,
            PrayerType::Jummah => PrayerSlot {
                athan: self.jummah,
                iqama: None,
            },
        }
    }

    pub fn athan(&self, prayer: PrayerType) -> Option<ClockTime> {
        self.slot(prayer).athan
    }

    pub fn iqama(&self, prayer: PrayerType) -> Option<ClockTime> {
        self.slot(prayer).iqama
    }

    pub fn is_friday(&self) -> bool {
        self.day_name == "Friday"
    }

    /// Serialise back into the positional column order.
    pub fn to_record(&self, format: &TableFormat) -> Vec<String> {
        let t = |v: Option<ClockTime>| format.format_time(v);
        vec![
            format.date_format.format(self.date),
            self.day_name.clone(),
            t(self.fajr.athan),
            t(self.fajr.iqama),
            t(self.sunrise),
            t(self.dhuhr.athan),
            t(self.dhuhr.iqama),
            t(self.jummah),
            t(self.asr.athan),
            t(self.asr.iqama),
            t(self.maghrib.athan),
            t(self.maghrib.iqama),
            t(self.isha.athan),
            t(self.isha.iqama),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jummah_slot_has_no_iqama() {
        let mut row = PrayerRow::empty(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(), "Friday");
        row.jummah = ClockTime::from_hm(13, 15);
        assert_eq!(row.athan(PrayerType::Jummah), ClockTime::from_hm(13, 15));
        assert_eq!(row.iqama(PrayerType::Jummah), None);
        assert!(row.is_friday());
    }

    #[test]
    fn prayer_names_parse_with_aliases() {
        assert_eq!("Fajr".parse::<PrayerType>(), Ok(PrayerType::Fajr));
        assert_eq!("zuhr".parse::<PrayerType>(), Ok(PrayerType::Dhuhr));
        assert_eq!(" Jumuah ".parse::<PrayerType>(), Ok(PrayerType::Jummah));
        assert!("tahajjud".parse::<PrayerType>().is_err());
        for prayer in PrayerType::all() {
            assert_eq!(prayer.display_name().parse::<PrayerType>(), Ok(prayer));
        }
    }

    #[test]
    fn friday_match_is_exact() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert!(!PrayerRow::empty(date, "friday").is_friday());
        assert!(!PrayerRow::empty(date, "Fri").is_friday());
    }
}
