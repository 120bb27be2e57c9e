use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ClockTime, TimeFormat};

fn default_skip_rows() -> usize {
    2
}

/// How the exported spreadsheet is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// No header; fixed column positions after the decorative rows.
    #[default]
    Positional,
    /// One header row naming the columns.
    Headed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateFormat {
    /// `DD-MM-YYYY`
    #[default]
    DayMonthYear,
    /// `YYYY-MM-DD`
    Iso,
}

impl DateFormat {
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::DayMonthYear => "%d-%m-%Y",
            DateFormat::Iso => "%Y-%m-%d",
        }
    }

    pub fn parse(self, raw: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw.trim(), self.pattern()).ok()
    }

    pub fn format(self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFormat {
    #[serde(default)]
    pub layout: Layout,
    /// Decorative rows stripped before the data in the positional layout.
    #[serde(default = "default_skip_rows")]
    pub skip_rows: usize,
    #[serde(default)]
    pub date_format: DateFormat,
    #[serde(default)]
    pub time_format: TimeFormat,
    /// Write hours as `05:07` rather than `5:07`. Also switched on when a
    /// loaded table uses padded hours.
    #[serde(default)]
    pub pad_hours: bool,
}

impl TableFormat {
    pub fn format_time(&self, t: Option<ClockTime>) -> String {
        t.map(|t| self.time_format.format_with(t, self.pad_hours))
            .unwrap_or_default()
    }
}

impl Default for TableFormat {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            skip_rows: default_skip_rows(),
            date_format: DateFormat::default(),
            time_format: TimeFormat::default(),
            pad_hours: false,
        }
    }
}

/// Cell positions of each field within a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColumnMap {
    pub date: usize,
    pub day: usize,
    pub fajr_athan: Option<usize>,
    pub fajr_iqama: Option<usize>,
    pub sunrise: Option<usize>,
    pub dhuhr_athan: Option<usize>,
    pub dhuhr_iqama: Option<usize>,
    pub jummah: Option<usize>,
    pub asr_athan: Option<usize>,
    pub asr_iqama: Option<usize>,
    pub maghrib_athan: Option<usize>,
    pub maghrib_iqama: Option<usize>,
    pub isha_athan: Option<usize>,
    pub isha_iqama: Option<usize>,
}

// Accepted spellings per field, compared after `normalize_header`.
const DATE_NAMES: &[&str] = &["date"];
const DAY_NAMES: &[&str] = &["day", "dayname", "weekday"];
const FAJR_ATHAN: &[&str] = &["fajr", "fajrathan", "fajradhan"];
const FAJR_IQAMA: &[&str] = &["fajriqama", "fajriqamah"];
const SUNRISE: &[&str] = &["sunrise", "shuruq", "shurooq"];
const DHUHR_ATHAN: &[&str] = &["dhuhr", "dhuhrathan", "dhuhradhan", "zuhr", "zuhrathan"];
const DHUHR_IQAMA: &[&str] = &["dhuhriqama", "dhuhriqamah", "zuhriqama"];
const JUMMAH: &[&str] = &["jummah", "jumuah", "juma", "jumma", "jummahtime"];
const ASR_ATHAN: &[&str] = &["asr", "asrathan", "asradhan"];
const ASR_IQAMA: &[&str] = &["asriqama", "asriqamah"];
const MAGHRIB_ATHAN: &[&str] = &["maghrib", "maghribathan", "maghribadhan"];
const MAGHRIB_IQAMA: &[&str] = &["maghribiqama", "maghribiqamah"];
const ISHA_ATHAN: &[&str] = &["isha", "ishaathan", "ishaadhan"];
const ISHA_IQAMA: &[&str] = &["ishaiqama", "ishaiqamah"];

fn normalize_header(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl ColumnMap {
    /// Positions of every clock-valued column present.
    pub fn time_columns(&self) -> impl Iterator<Item = usize> {
        [
            self.fajr_athan,
            self.fajr_iqama,
            self.sunrise,
            self.dhuhr_athan,
            self.dhuhr_iqama,
            self.jummah,
            self.asr_athan,
            self.asr_iqama,
            self.maghrib_athan,
            self.maghrib_iqama,
            self.isha_athan,
            self.isha_iqama,
        ]
        .into_iter()
        .flatten()
    }

    pub fn positional() -> Self {
        Self {
            date: 0,
            day: 1,
            fajr_athan: Some(2),
            fajr_iqama: Some(3),
            sunrise: Some(4),
            dhuhr_athan: Some(5),
            dhuhr_iqama: Some(6),
            jummah: Some(7),
            asr_athan: Some(8),
            asr_iqama: Some(9),
            maghrib_athan: Some(10),
            maghrib_iqama: Some(11),
            isha_athan: Some(12),
            isha_iqama: Some(13),
        }
    }

    /// Resolve positions from a header record. `Err` names the missing
    /// required column.
    pub fn from_headers<'a>(
        headers: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, &'static str> {
        let names: Vec<String> = headers.into_iter().map(normalize_header).collect();
        let find = |aliases: &[&str]| names.iter().position(|n| aliases.contains(&n.as_str()));

        Ok(Self {
            date: find(DATE_NAMES).ok_or("Date")?,
            day: find(DAY_NAMES).ok_or("Day")?,
            fajr_athan: find(FAJR_ATHAN),
            fajr_iqama: find(FAJR_IQAMA),
            sunrise: find(SUNRISE),
            dhuhr_athan: find(DHUHR_ATHAN),
            dhuhr_iqama: find(DHUHR_IQAMA),
            jummah: find(JUMMAH),
            asr_athan: find(ASR_ATHAN),
            asr_iqama: find(ASR_IQAMA),
            maghrib_athan: find(MAGHRIB_ATHAN),
            maghrib_iqama: find(MAGHRIB_IQAMA),
            isha_athan: find(ISHA_ATHAN),
            isha_iqama: find(ISHA_IQAMA),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_spaced_and_aliased_headers() {
        let headers = [
            "Date", "Day Name", "Fajr Athan", "Fajr_Iqama", "Shuruq", "Zuhr", "Zuhr Iqama",
            "Jumu'ah", "Asr", "Asr Iqama", "Maghrib", "Maghrib Iqama", "Isha", "Isha Iqama",
        ];
        let map = ColumnMap::from_headers(headers).unwrap();
        assert_eq!(map, ColumnMap::positional());
    }

    #[test]
    fn optional_columns_may_be_missing() {
        let map = ColumnMap::from_headers(["Day", "Date", "Fajr"]).unwrap();
        assert_eq!(map.date, 1);
        assert_eq!(map.day, 0);
        assert_eq!(map.fajr_athan, Some(2));
        assert_eq!(map.jummah, None);
    }

    #[test]
    fn date_and_day_are_required() {
        assert_eq!(ColumnMap::from_headers(["Day", "Fajr"]), Err("Date"));
        assert_eq!(ColumnMap::from_headers(["Date", "Fajr"]), Err("Day"));
    }

    #[test]
    fn date_formats() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(DateFormat::DayMonthYear.parse("07-03-2025"), Some(d));
        assert_eq!(DateFormat::Iso.parse("2025-03-07"), Some(d));
        assert_eq!(DateFormat::Iso.parse("07-03-2025"), None);
        assert_eq!(DateFormat::DayMonthYear.format(d), "07-03-2025");
    }
}
